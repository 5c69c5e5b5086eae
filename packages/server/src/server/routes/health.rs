/// Liveness endpoint
pub async fn root_handler() -> &'static str {
    "Social Development Events Server is running"
}
