//! Caller-driven pagination over continuation tokens.
//!
//! A result page carrying a non-empty `NextToken` means more results exist;
//! the caller resubmits the same query with that token to fetch the next
//! page. An absent or empty token is the terminal page. No state is held
//! between pages beyond the token itself, so every fetch is independent and
//! idempotent for a given token.

use log::debug;

/// A request that can be resubmitted with a continuation token.
pub trait PagedRequest {
    fn set_continuation(&mut self, token: Option<String>);
}

/// A result page exposing its continuation token, if any.
pub trait PagedResult {
    fn continuation(&self) -> Option<&str>;
}

/// Drives a full pagination loop: fetch, visit, resubmit with the returned
/// token, stop on a terminal page. Errors from `call` abort the loop
/// unchanged.
pub fn for_each_page<Req, Res, E, Call, Visit>(
    mut request: Req,
    mut call: Call,
    mut visit: Visit,
) -> Result<(), E>
where
    Req: PagedRequest,
    Res: PagedResult,
    Call: FnMut(&Req) -> Result<Res, E>,
    Visit: FnMut(Res),
{
    let mut pages = 0u64;
    loop {
        let page = call(&request)?;
        pages += 1;
        let token = page
            .continuation()
            .filter(|token| !token.is_empty())
            .map(str::to_string);
        visit(page);
        match token {
            Some(token) => {
                debug!("page {} had a continuation token, fetching next page", pages);
                request.set_continuation(Some(token));
            }
            None => {
                debug!("pagination finished after {} page(s)", pages);
                return Ok(());
            }
        }
    }
}
