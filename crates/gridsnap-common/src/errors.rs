#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("window host error: {0}")]
    WindowHost(String),

    #[error("dpi conversion error: {0}")]
    Dpi(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_error_display() {
        let err = PlatformError::WindowHost("handle is gone".into());
        assert_eq!(err.to_string(), "window host error: handle is gone");

        let err = PlatformError::Dpi("unknown monitor".into());
        assert_eq!(err.to_string(), "dpi conversion error: unknown monitor");

        let err = PlatformError::NotSupported("wayland".into());
        assert_eq!(err.to_string(), "not supported: wayland");
    }
}
