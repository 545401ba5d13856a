//! Deferred image sources.

/// An image whose real source is only assigned once it becomes visible
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LazySource {
    deferred: String,
    revealed: bool,
}

impl LazySource {
    pub fn new(deferred: impl Into<String>) -> Self {
        Self {
            deferred: deferred.into(),
            revealed: false,
        }
    }

    /// Mark visible. Returns the source on the first call only.
    pub fn reveal(&mut self) -> Option<&str> {
        if self.revealed {
            return None;
        }
        self.revealed = true;
        Some(&self.deferred)
    }

    /// Source to render, if revealed
    pub fn src(&self) -> Option<&str> {
        self.revealed.then_some(self.deferred.as_str())
    }

    pub fn class(&self) -> &'static str {
        if self.revealed {
            ""
        } else {
            "lazy"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_one_shot() {
        let mut image = LazySource::new("/static/cards/dark-magician.webp");
        assert_eq!(image.src(), None);
        assert_eq!(image.class(), "lazy");

        assert_eq!(image.reveal(), Some("/static/cards/dark-magician.webp"));
        assert_eq!(image.reveal(), None);
        assert_eq!(image.src(), Some("/static/cards/dark-magician.webp"));
        assert_eq!(image.class(), "");
    }
}
