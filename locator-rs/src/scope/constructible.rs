//! Constructible: type-driven object name. Use `#[derive(Constructible)]`.

/// Object name a type is registered under. Derived name is the snake_case type name
/// (e.g. `HttpClient` → `http_client`).
pub trait Constructible {
    fn object_name() -> &'static str
    where
        Self: Sized;
}
