/// Shortest accepted `imageBase64`; anything below is treated as an empty photo.
pub const MIN_IMAGE_BASE64_LEN: u64 = 100;

/// Longest accepted `imageBase64`, checked before the upstream call.
pub const MAX_IMAGE_BASE64_LEN: usize = 3_500_000;

/// Mime type the image is re-wrapped with before it is sent upstream.
pub const UPSTREAM_IMAGE_MIME: &str = "image/jpeg";
