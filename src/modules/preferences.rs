//! Commands that change per-session extraction settings.

use anyhow::Result;

use crate::common::{BotEnv, Outbox};
use crate::modules::basic::algorithm_list;
use crate::prefs::{parse_n_keywords, Algorithm, SessionId};

pub async fn set_algorithm(
    env: &BotEnv,
    session: SessionId,
    arg: Option<&str>,
    out: &mut dyn Outbox,
) -> Result<()> {
    let text = match arg.map(|a| (a, a.parse::<Algorithm>())) {
        None => format!(
            "Вы не указали алгоритм, по умолчанию используется {}\n\
             Возможны следующие алгоритмы: {}",
            Algorithm::default(),
            algorithm_list(),
        ),
        Some((name, Err(_))) => {
            log::debug!("Rejected unknown algorithm {name:?}");
            format!(
                "Указанный алгоритм не поддерживается\n\
                 Возможны следующие алгоритмы: {}",
                algorithm_list(),
            )
        }
        Some((_, Ok(algorithm))) => {
            env.prefs.update(session, |p| p.algorithm = Some(algorithm));
            format!(
                "Теперь при извлечении ключевых слов используется алгоритм {algorithm}"
            )
        }
    };
    out.send(text).await
}

pub async fn set_n_keywords(
    env: &BotEnv,
    session: SessionId,
    arg: Option<&str>,
    out: &mut dyn Outbox,
) -> Result<()> {
    let n_keywords = parse_n_keywords(arg);
    env.prefs.update(session, |p| p.n_keywords = Some(n_keywords));
    out.send(format!("Количество извлекаемых ключевых слов равно {n_keywords}"))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::Preferences;
    use crate::testing::{Harness, ALICE};

    #[tokio::test]
    async fn unknown_algorithm_is_rejected() {
        let h = Harness::default();
        h.env.prefs.update(ALICE, |p| p.algorithm = Some(Algorithm::Textrank));

        for name in ["rake", "TFIDF", "yake2", ""] {
            let mut out: Vec<String> = Vec::new();
            set_algorithm(&h.env, ALICE, Some(name), &mut out).await.unwrap();
            assert_eq!(out.len(), 1);
            assert!(out[0].starts_with("Указанный алгоритм не поддерживается"));
            assert!(out[0].ends_with(&algorithm_list()));
            assert_eq!(h.env.prefs.get(ALICE).algorithm, Some(Algorithm::Textrank));
        }
    }

    #[tokio::test]
    async fn valid_algorithm_is_stored() {
        let h = Harness::default();
        for algorithm in Algorithm::ALL {
            let mut out: Vec<String> = Vec::new();
            set_algorithm(&h.env, ALICE, Some(algorithm.as_str()), &mut out)
                .await
                .unwrap();
            assert_eq!(
                out,
                [format!(
                    "Теперь при извлечении ключевых слов используется алгоритм {algorithm}"
                )]
            );
            assert_eq!(h.env.prefs.get(ALICE).algorithm, Some(algorithm));
        }
    }

    #[tokio::test]
    async fn missing_algorithm_leaves_prefs_alone() {
        let h = Harness::default();
        let mut out: Vec<String> = Vec::new();
        set_algorithm(&h.env, ALICE, None, &mut out).await.unwrap();
        assert!(out[0].contains("по умолчанию используется yake"));
        assert!(out[0].contains(&algorithm_list()));
        assert_eq!(h.env.prefs.get(ALICE), Preferences::default());
    }

    #[tokio::test]
    async fn n_keywords_is_always_stored() {
        let h = Harness::default();
        let cases =
            [(Some("3"), 3), (Some("-5"), 5), (Some("abc"), 10), (None, 10)];
        for (arg, expected) in cases {
            h.env.prefs.update(ALICE, |p| p.n_keywords = Some(99));
            let mut out: Vec<String> = Vec::new();
            set_n_keywords(&h.env, ALICE, arg, &mut out).await.unwrap();
            assert_eq!(
                out,
                [format!("Количество извлекаемых ключевых слов равно {expected}")]
            );
            assert_eq!(h.env.prefs.get(ALICE).n_keywords, Some(expected));
        }
    }
}
