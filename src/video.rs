use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type", default)]
    pub video_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoList {
    #[serde(default)]
    pub results: Vec<Video>,
}

/// Pick the video to present as the trailer: the first trailer whose name
/// mentions "official", then the first trailer, then the first video of any
/// kind. Type and name matching are case-insensitive.
pub fn select_trailer(videos: &[Video]) -> Option<&Video> {
    videos
        .iter()
        .find(|v| is_trailer(v) && v.name.to_lowercase().contains("official"))
        .or_else(|| videos.iter().find(|v| is_trailer(v)))
        .or_else(|| videos.first())
}

fn is_trailer(video: &Video) -> bool {
    video.video_type.eq_ignore_ascii_case("trailer")
}

pub fn youtube_embed_url(key: &str) -> Option<String> {
    if key.is_empty() {
        return None;
    }
    Some(format!("https://www.youtube.com/embed/{key}"))
}
