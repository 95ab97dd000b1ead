use crate::ports::{DnsHandler, ResponseSink};
use hickory_proto::op::{Message, ResponseCode};
use kube_extdns_domain::DomainError;
use std::sync::Arc;
use tracing::warn;

/// Hands the request to `next`, or answers SERVFAIL when `name` is the last
/// link of the chain.
pub async fn next_or_failure(
    name: &str,
    next: Option<&Arc<dyn DnsHandler>>,
    request: &Message,
    sink: &mut dyn ResponseSink,
) -> Result<ResponseCode, DomainError> {
    match next {
        Some(next) => next.serve_dns(request, sink).await,
        None => {
            warn!(handler = name, "No next handler in chain");
            Ok(ResponseCode::ServFail)
        }
    }
}

/// Whether a handler returning `rcode` has already written its reply.
pub fn client_wrote(rcode: ResponseCode) -> bool {
    !matches!(
        rcode,
        ResponseCode::ServFail
            | ResponseCode::Refused
            | ResponseCode::FormErr
            | ResponseCode::NotImp
    )
}
