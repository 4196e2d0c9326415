//! Delete Charge Handler

use std::sync::Arc;

use salvo::flash::FlashDepotExt;
use salvo::{http::header::LOCATION, prelude::*};

use crate::{charges::errors::into_status_error, extensions::*, state::State};

/// Delete a charge and return to the search form with a one-shot deleted
/// message. Deleting an absent id succeeds silently.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let id = req
        .param::<i32>("id")
        .ok_or_else(|| StatusError::bad_request().brief("invalid charge id"))?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .charges
        .delete_by_id(id)
        .await
        .map_err(into_status_error)?;

    depot.outgoing_flash_mut().info("削除しました。");

    res.add_header(LOCATION, "/charge/search", true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::FOUND);

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::http::header::LOCATION;
    use salvo::test::TestClient;
    use testresult::TestResult;

    use charge_app::domain::charges::MockChargesService;

    use crate::test_helpers::charge_service;

    use super::*;

    #[tokio::test]
    async fn test_delete_redirects_to_search() -> TestResult {
        let mut repo = MockChargesService::new();

        repo.expect_delete_by_id()
            .once()
            .withf(|id| *id == 42)
            .return_once(|_| Ok(()));

        repo.expect_find_all().never();
        repo.expect_find_by_id().never();
        repo.expect_find_by_conditions().never();
        repo.expect_save().never();

        let res = TestClient::get("http://example.com/charge/delete/42")
            .send(&charge_service(repo))
            .await;

        let location = res.headers().get(LOCATION).and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::FOUND));
        assert_eq!(location, Some("/charge/search"));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_absent_id_still_redirects() -> TestResult {
        let mut repo = MockChargesService::new();

        repo.expect_delete_by_id()
            .once()
            .withf(|id| *id == 999_999)
            .return_once(|_| Ok(()));

        repo.expect_find_all().never();
        repo.expect_find_by_id().never();
        repo.expect_find_by_conditions().never();
        repo.expect_save().never();

        let res = TestClient::get("http://example.com/charge/delete/999999")
            .send(&charge_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_malformed_id_returns_400() -> TestResult {
        let mut repo = MockChargesService::new();

        repo.expect_find_all().never();
        repo.expect_find_by_id().never();
        repo.expect_find_by_conditions().never();
        repo.expect_save().never();
        repo.expect_delete_by_id().never();

        let res = TestClient::get("http://example.com/charge/delete/abc")
            .send(&charge_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
