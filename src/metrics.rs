#[allow(clippy::module_name_repetitions)] // For consistency with other modules.
pub fn register_metrics() {
    // Descriptions of labeled metrics
    metrics::describe_counter!(
        "kwbot_events_total",
        "Number of handled chat events, by command."
    );
    metrics::describe_gauge!(
        "kwbot_service_access_success",
        "1 if the last access to the service was successful, 0 otherwise."
    );
    metrics::describe_gauge!(
        "kwbot_service_last_access_timestamp_seconds",
        "UNIX timestamp of the last access to the service."
    );

    // Constant metrics

    // kwbot_start_time_seconds
    metrics::describe_gauge!(
        "kwbot_start_time_seconds",
        "Unix timestamp of the bot start time."
    );
    metrics::gauge!(
        "kwbot_start_time_seconds",
        std::time::UNIX_EPOCH.elapsed().unwrap_or_default().as_secs_f64(),
    );

    // kwbot_build_info
    metrics::describe_gauge!(
        "kwbot_build_info",
        "A metric with a constant '1' value with the kwbot build information."
    );
    metrics::gauge!(
        "kwbot_build_info",
        1.0,
        "revision" => crate::version(),
    );
}

/// Record the outcome of a call to an external service.
pub fn update_service(name: &'static str, success: bool) {
    metrics::gauge!(
        "kwbot_service_access_success",
        if success { 1.0 } else { 0.0 },
        "service" => name,
    );
    metrics::gauge!(
        "kwbot_service_last_access_timestamp_seconds",
        std::time::UNIX_EPOCH.elapsed().unwrap_or_default().as_secs_f64(),
        "service" => name,
        "status" => if success { "success" } else { "failure" },
    );
}
