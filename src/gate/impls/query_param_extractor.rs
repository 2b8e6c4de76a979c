use crate::common::common::parse_query;
use crate::gate::structs::query_param_extractor::QueryParamExtractor;
use crate::gate::traits::user_token_extractor::UserTokenExtractor;
use crate::tracker::structs::announce_request::AnnounceRequest;

impl QueryParamExtractor {
    pub fn new(param: &str) -> QueryParamExtractor {
        QueryParamExtractor { param: param.to_lowercase() }
    }
}

impl UserTokenExtractor for QueryParamExtractor {
    fn extract(&self, request: &AnnounceRequest) -> String {
        let Ok(query) = parse_query(request.query.clone()) else {
            return String::new();
        };
        query.get(&self.param)
            .and_then(|values| values.first())
            .map(|value| String::from_utf8_lossy(value).into_owned())
            .unwrap_or_default()
    }
}
