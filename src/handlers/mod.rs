pub mod inspect;
pub mod redirect;
pub mod shorten;

/// GET /
///
/// Static greeting so hitting the bare host confirms the service is up.
pub async fn root() -> &'static str {
    "Hello! Welcome to the URL shortener!"
}
