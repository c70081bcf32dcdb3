use std::fmt::Display;

pub trait Strerr<T> {
    fn strerr(self) -> Result<T, String>;

    /// Same as `strerr`, with `what` in front of the message.
    fn strerr_at(self, what: impl Display) -> Result<T, String>;
}

impl<T, U: ToString> Strerr<T> for Result<T, U> {
    fn strerr(self) -> Result<T, String> {
        self.map_err(|e| e.to_string())
    }

    fn strerr_at(self, what: impl Display) -> Result<T, String> {
        self.map_err(|e| format!("{what}: {}", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_context() {
        let r: Result<(), &str> = Err("not found");
        assert_eq!(
            r.strerr_at("sounds/pn9.wav"),
            Err("sounds/pn9.wav: not found".into())
        );
    }

    #[test]
    fn passes_ok_through() {
        let r: Result<u8, &str> = Ok(3);
        assert_eq!(r.strerr(), Ok(3));
    }
}
