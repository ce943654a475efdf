//! Stateless informational commands.

use anyhow::Result;

use crate::common::{format_list, Outbox};
use crate::prefs::Algorithm;

const USAGE: &str = "\
Добрый день! Я демонстрационный бот суммаризации групп вк и выделения ключевых слов.
Чтобы выделить ключевые слова какого-то текста на русском, пришли мне сообщение
Чтобы вывести список доступных алгоритмов набери /list_algorithms
Чтобы сменить алгоритм выделения ключевых слов набери /keywords_algorithm `algo_name`
Чтобы задать количество ключевых слов набери /n_keywords `5`
Чтобы создать суммаризацию группы набери /summarize_group `apiclub`, где название группы из https://vk.com/apiclub";

pub fn algorithm_list() -> String {
    format_list(Algorithm::ALL)
}

pub async fn start(out: &mut dyn Outbox) -> Result<()> {
    out.send(USAGE.to_string()).await
}

pub async fn list_algorithms(out: &mut dyn Outbox) -> Result<()> {
    out.send(algorithm_list()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_start() {
        let mut out: Vec<String> = Vec::new();
        start(&mut out).await.unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].lines().count(), 6);
        for command in
            ["/list_algorithms", "/keywords_algorithm", "/n_keywords", "/summarize_group"]
        {
            assert!(out[0].contains(command), "{command} is not mentioned");
        }
    }

    #[tokio::test]
    async fn test_list_algorithms() {
        let mut out: Vec<String> = Vec::new();
        list_algorithms(&mut out).await.unwrap();
        assert_eq!(out, ["['tfidf', 'textrank', 'topicrank', 'yake']"]);
    }
}
