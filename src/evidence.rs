//! Item Evidence
//!
//! Photo references and GPS links attached to checklist items.

/// Shown when a server-hosted photo fails to load
pub const MISSING_PHOTO_PLACEHOLDER: &str = "https://placehold.co/400x300?text=Image+Missing+on+Server";

/// Schemes that only resolve on the submitting device
const DEVICE_LOCAL_SCHEMES: &[&str] = &["blob:", "file:"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoRef {
    /// Reference to the phone's own storage; the browser can't fetch it
    DeviceLocal,
    Remote(String),
}

impl PhotoRef {
    /// Classify a photo uri; `None` when there is nothing to show
    pub fn classify(uri: &str) -> Option<Self> {
        let uri = uri.trim();
        if uri.is_empty() {
            return None;
        }
        let device_local = DEVICE_LOCAL_SCHEMES.iter().any(|scheme| {
            uri.get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        });
        Some(if device_local { Self::DeviceLocal } else { Self::Remote(uri.to_string()) })
    }
}

/// External map link for a coordinate pair
pub fn maps_url(lat: f64, lon: f64) -> String {
    format!("https://www.google.com/maps?q={},{}", lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_local_schemes() {
        assert_eq!(PhotoRef::classify("blob:http://localhost/abc"), Some(PhotoRef::DeviceLocal));
        assert_eq!(PhotoRef::classify("file:///data/user/0/photo.jpg"), Some(PhotoRef::DeviceLocal));
        assert_eq!(PhotoRef::classify("FILE:///sdcard/x.png"), Some(PhotoRef::DeviceLocal));
    }

    #[test]
    fn test_remote_references() {
        assert_eq!(
            PhotoRef::classify("https://cdn.example.com/p/1.jpg"),
            Some(PhotoRef::Remote("https://cdn.example.com/p/1.jpg".into()))
        );
        assert_eq!(
            PhotoRef::classify("/uploads/1.jpg"),
            Some(PhotoRef::Remote("/uploads/1.jpg".into()))
        );
        // "fil" is shorter than any device scheme
        assert_eq!(PhotoRef::classify("fil"), Some(PhotoRef::Remote("fil".into())));
    }

    #[test]
    fn test_blank_reference() {
        assert_eq!(PhotoRef::classify(""), None);
        assert_eq!(PhotoRef::classify("   "), None);
    }

    #[test]
    fn test_maps_url() {
        assert_eq!(maps_url(-6.2, 106.8166), "https://www.google.com/maps?q=-6.2,106.8166");
        assert_eq!(maps_url(1.0, 2.0), "https://www.google.com/maps?q=1,2");
    }
}
