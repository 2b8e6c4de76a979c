use crate::gate::structs::path_segment_extractor::PathSegmentExtractor;
use crate::gate::traits::user_token_extractor::UserTokenExtractor;
use crate::tracker::structs::announce_request::AnnounceRequest;

impl PathSegmentExtractor {
    pub fn new(segment: usize) -> PathSegmentExtractor {
        PathSegmentExtractor { segment }
    }

    pub fn extract_from_path(&self, path: &str) -> String {
        let path = path.split_once('?').map_or(path, |(path, _)| path);
        let segments: Vec<&str> = path.split('/').collect();
        if segments.len() == self.segment + 1 {
            percent_encoding::percent_decode_str(segments[self.segment]).decode_utf8_lossy().into_owned()
        } else {
            String::new()
        }
    }
}

impl Default for PathSegmentExtractor {
    fn default() -> Self {
        PathSegmentExtractor::new(2)
    }
}

impl UserTokenExtractor for PathSegmentExtractor {
    fn extract(&self, request: &AnnounceRequest) -> String {
        self.extract_from_path(&request.path)
    }
}
