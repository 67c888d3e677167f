use crate::domain::{AssetItem, RawAsset};

/// Audio and video extensions that never render as an image.
pub const MEDIA_EXTENSIONS: &[&str] = &[
    "mp3", "mp4", "m4a", "m4v", "wav", "ogg", "oga", "ogv", "flac", "aac", "webm", "mov",
];

/// Keeps the assets that can be shown as an image, in provider order.
pub fn displayable_images(assets: Vec<RawAsset>) -> Vec<AssetItem> {
    assets.into_iter().filter_map(into_image).collect()
}

fn into_image(asset: RawAsset) -> Option<AssetItem> {
    let name = asset.name.filter(|name| !name.is_empty())?;
    let image_url = asset.image_url.filter(|url| !url.is_empty())?;

    if is_media_url(&image_url) {
        return None;
    }

    Some(AssetItem {
        name,
        image_url,
        permalink: asset.permalink,
        token_id: asset.token_id,
    })
}

/// True when the path of `url` ends in a `.` followed by a denylisted extension
/// (case-insensitive), so a bare `.mp4` counts too. Query strings and fragments
/// are ignored.
pub fn is_media_url(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url);

    let Some((_, extension)) = path.rsplit_once('.') else {
        return false;
    };

    if extension.contains('/') {
        return false;
    }

    MEDIA_EXTENSIONS
        .iter()
        .any(|media| media.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn drops_video_keeps_image() {
        let assets = vec![RawAsset::new("A", "a.png"), RawAsset::new("B", "b.mp4")];
        assert_eq!(displayable_images(assets), vec![AssetItem::new("A", "a.png")]);
    }

    #[test]
    fn drops_missing_or_empty_fields() {
        let assets = vec![
            RawAsset::new("", "a.png"),
            RawAsset::new("B", ""),
            RawAsset {
                name: None,
                image_url: Some("c.png".to_string()),
                ..RawAsset::default()
            },
            RawAsset {
                name: Some("D".to_string()),
                image_url: None,
                ..RawAsset::default()
            },
            RawAsset::new("E", "e.gif"),
        ];
        assert_eq!(displayable_images(assets), vec![AssetItem::new("E", "e.gif")]);
    }

    #[test]
    fn preserves_provider_order() {
        let assets = vec![
            RawAsset::new("3", "https://x/3.png"),
            RawAsset::new("1", "https://x/1.MP3"),
            RawAsset::new("2", "https://x/2.svg"),
            RawAsset::new("0", "https://x/0.jpg"),
        ];
        let names: Vec<_> = displayable_images(assets)
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["3", "2", "0"]);
    }

    #[test]
    fn media_match_is_case_insensitive() {
        assert!(is_media_url("https://cdn.example/clip.MP4"));
        assert!(is_media_url("https://cdn.example/song.Mp3"));
        assert!(is_media_url("https://cdn.example/loop.webm"));
    }

    #[test]
    fn media_match_ignores_query_and_fragment() {
        assert!(is_media_url("https://cdn.example/clip.mp4?w=500"));
        assert!(is_media_url("https://cdn.example/clip.mp4#t=10"));
        assert!(!is_media_url("https://cdn.example/image.png?format=mp4"));
    }

    #[test]
    fn urls_without_extension_are_images() {
        assert!(!is_media_url("https://lh3.googleusercontent.com/abc123"));
        assert!(!is_media_url("https://cdn.example.mp4/image"));
        assert!(!is_media_url("mp4"));
    }

    #[test]
    fn bare_extension_is_media() {
        assert!(is_media_url(".mp4"));
        assert!(is_media_url("/.MP3"));
        assert_eq!(
            displayable_images(vec![RawAsset::new("A", ".mp4")]),
            Vec::<AssetItem>::new()
        );
    }

    #[test]
    fn carries_permalink_and_token_id() {
        let asset = RawAsset {
            permalink: Some("https://market/1".to_string()),
            token_id: Some("1".to_string()),
            ..RawAsset::new("A", "a.png")
        };
        let items = displayable_images(vec![asset]);
        assert_eq!(items[0].permalink.as_deref(), Some("https://market/1"));
        assert_eq!(items[0].token_id.as_deref(), Some("1"));
    }
}
