//! Include depth query parsing helpers.

use inventory_app::domain::hierarchy::Depth;

use crate::errors::ApiError;

pub(crate) trait DepthExt {
    /// Missing values select the full descendant chain.
    fn into_depth(self) -> Result<Depth, ApiError>;
}

impl DepthExt for Option<u8> {
    fn into_depth(self) -> Result<Depth, ApiError> {
        self.map_or(Ok(Depth::FULL), |levels| {
            Depth::new(levels).map_err(|error| ApiError::bad_request(error.to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn missing_depth_is_full() {
        assert_eq!(None::<u8>.into_depth(), Ok(Depth::FULL));
    }

    #[test]
    fn depth_within_bounds_is_kept() {
        assert_eq!(Some(1_u8).into_depth().map(Depth::levels), Ok(1));
    }

    #[test]
    fn depth_above_three_is_a_bad_request() {
        let error = Some(4_u8).into_depth().err();

        assert_eq!(error.as_ref().map(ApiError::status), Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            error.as_ref().map(ApiError::message),
            Some("depth must be between 0 and 3")
        );
    }
}
