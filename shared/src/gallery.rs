pub const GALLERY_SIZE: usize = 18;

/// `images/1.jpg` through `images/18.jpg`.
pub fn gallery_images() -> Vec<String> {
    (1..=GALLERY_SIZE).map(|n| format!("images/{}.jpg", n)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    Previous,
    Next,
}

impl LightboxKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Escape),
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Full-screen image viewer over the gallery grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    images: Vec<String>,
    current: usize,
    open: bool,
}

impl Lightbox {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            current: 0,
            open: false,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_src(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    /// Opens on `src`. Returns false if it is not part of the gallery.
    pub fn open(&mut self, src: &str) -> bool {
        match self.images.iter().position(|image| image == src) {
            Some(index) => self.open_at(index),
            None => false,
        }
    }

    pub fn open_at(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.current = index;
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Moves by `direction` images, wrapping at both ends.
    pub fn step(&mut self, direction: isize) {
        let len = self.images.len() as isize;
        if len == 0 {
            return;
        }
        self.current = (self.current as isize + direction).rem_euclid(len) as usize;
    }

    /// Applies a navigation key. Keys are ignored while closed; returns
    /// whether anything changed.
    pub fn handle_key(&mut self, key: LightboxKey) -> bool {
        if !self.open {
            return false;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::Previous => self.step(-1),
            LightboxKey::Next => self.step(1),
        }
        true
    }
}

impl Default for Lightbox {
    fn default() -> Self {
        Self::new(gallery_images())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_paths() {
        let images = gallery_images();
        assert_eq!(images.len(), 18);
        assert_eq!(images[0], "images/1.jpg");
        assert_eq!(images[17], "images/18.jpg");
    }

    #[test]
    fn test_open_by_source() {
        let mut lightbox = Lightbox::default();
        assert!(lightbox.open("images/5.jpg"));
        assert!(lightbox.is_open());
        assert_eq!(lightbox.current_index(), 4);

        lightbox.close();
        assert!(!lightbox.open("images/99.jpg"));
        assert!(!lightbox.is_open());
        assert!(!lightbox.open_at(18));
    }

    #[test]
    fn test_step_wraps_both_ways() {
        let mut lightbox = Lightbox::default();
        lightbox.open_at(0);
        lightbox.step(-1);
        assert_eq!(lightbox.current_src(), Some("images/18.jpg"));
        lightbox.step(1);
        assert_eq!(lightbox.current_src(), Some("images/1.jpg"));
    }

    #[test]
    fn test_keys_only_apply_while_open() {
        let mut lightbox = Lightbox::default();
        assert!(!lightbox.handle_key(LightboxKey::Next));
        assert_eq!(lightbox.current_index(), 0);

        lightbox.open_at(17);
        assert!(lightbox.handle_key(LightboxKey::Next));
        assert_eq!(lightbox.current_index(), 0);
        assert!(lightbox.handle_key(LightboxKey::Previous));
        assert_eq!(lightbox.current_index(), 17);
        assert!(lightbox.handle_key(LightboxKey::Escape));
        assert!(!lightbox.is_open());

        assert_eq!(LightboxKey::from_key("ArrowLeft"), Some(LightboxKey::Previous));
        assert_eq!(LightboxKey::from_key("Enter"), None);
    }

    #[test]
    fn test_empty_gallery_is_inert() {
        let mut lightbox = Lightbox::new(Vec::new());
        lightbox.step(1);
        assert!(!lightbox.open_at(0));
        assert_eq!(lightbox.current_src(), None);
    }
}
