/// Path and query of a single TMDB API call.
///
/// The API key is not part of the descriptor; [`super::client::ApiClient`]
/// appends it from configuration when the request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub path: String,
    pub query: Vec<(&'static str, String)>,
}

impl ApiRequest {
    fn new(path: String) -> Self {
        Self {
            path,
            query: Vec::new(),
        }
    }

    fn page(mut self, page: u32) -> Self {
        self.query.push(("page", page.to_string()));
        self
    }

    pub fn popular_people(page: u32) -> Self {
        Self::new("/3/person/popular".to_string()).page(page)
    }

    pub fn person(id: u64) -> Self {
        Self::new(format!("/3/person/{id}"))
    }

    pub fn popular_movies(page: u32) -> Self {
        Self::new("/3/movie/popular".to_string()).page(page)
    }

    pub fn now_playing_movies(page: u32) -> Self {
        Self::new("/3/movie/now_playing".to_string()).page(page)
    }

    pub fn movie(id: u64) -> Self {
        Self::new(format!("/3/movie/{id}"))
    }

    pub fn movie_reviews(id: u64) -> Self {
        Self::new(format!("/3/movie/{id}/reviews"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_requests_carry_page() {
        let req = ApiRequest::now_playing_movies(4);
        assert_eq!(req.path, "/3/movie/now_playing");
        assert_eq!(req.query, vec![("page", "4".to_string())]);

        assert_eq!(ApiRequest::popular_people(1).path, "/3/person/popular");
        assert_eq!(ApiRequest::popular_movies(1).path, "/3/movie/popular");
    }

    #[test]
    fn entity_requests_have_no_page() {
        assert_eq!(ApiRequest::person(287).path, "/3/person/287");
        assert_eq!(ApiRequest::movie(550).path, "/3/movie/550");
        assert_eq!(ApiRequest::movie_reviews(550).path, "/3/movie/550/reviews");
        assert!(ApiRequest::movie_reviews(550).query.is_empty());
    }
}
