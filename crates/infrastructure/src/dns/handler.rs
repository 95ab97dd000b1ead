use super::message_builder::MessageBuilder;
use super::record_type_map::RecordTypeMapper;
use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use kube_extdns_application::ports::{DnsHandler, ResponseSink};
use kube_extdns_application::services::next_or_failure;
use kube_extdns_application::use_cases::{ExternalNameOutcome, ResolveExternalNameUseCase};
use kube_extdns_domain::{DnsRequest, DomainError};
use std::sync::Arc;
use tracing::debug;

const HANDLER_NAME: &str = "extname";

/// Chain link answering `<service>.<zone>` queries from the service registry.
pub struct ExternalNameHandler {
    use_case: Arc<ResolveExternalNameUseCase>,
    next: Option<Arc<dyn DnsHandler>>,
}

impl ExternalNameHandler {
    pub fn new(use_case: Arc<ResolveExternalNameUseCase>) -> Self {
        Self {
            use_case,
            next: None,
        }
    }

    pub fn with_next(mut self, next: Arc<dyn DnsHandler>) -> Self {
        self.next = Some(next);
        self
    }

    async fn delegate(
        &self,
        request: &Message,
        sink: &mut dyn ResponseSink,
    ) -> Result<ResponseCode, DomainError> {
        next_or_failure(HANDLER_NAME, self.next.as_ref(), request, sink).await
    }
}

#[async_trait]
impl DnsHandler for ExternalNameHandler {
    fn name(&self) -> &str {
        HANDLER_NAME
    }

    async fn serve_dns(
        &self,
        request: &Message,
        sink: &mut dyn ResponseSink,
    ) -> Result<ResponseCode, DomainError> {
        let Some(query) = request.queries().first() else {
            debug!("Request without question, delegating");
            return self.delegate(request, sink).await;
        };

        let dns_request = DnsRequest::new(
            query.name().to_ascii(),
            RecordTypeMapper::from_hickory(query.query_type()),
        );

        match self.use_case.execute(&dns_request).await {
            ExternalNameOutcome::Delegate(reason) => {
                debug!(qname = %dns_request.name, reason = ?reason, "Delegating to next handler");
                self.delegate(request, sink).await
            }
            ExternalNameOutcome::Answer(records) => {
                let reply = MessageBuilder::answer(request, &records)?;
                sink.write_message(reply).await?;
                Ok(ResponseCode::NoError)
            }
            ExternalNameOutcome::BackendError { zone, serial } => {
                debug!(qname = %dns_request.name, zone = %zone, "No service matched, answering with SOA");
                let reply =
                    MessageBuilder::backend_error(request, &zone, serial, self.use_case.ttl_seconds())?;
                sink.write_message(reply).await?;
                Ok(ResponseCode::NoError)
            }
        }
    }
}
