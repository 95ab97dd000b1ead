use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use kube_extdns_domain::DomainError;

/// Destination for the reply of a request.
#[async_trait]
pub trait ResponseSink: Send {
    async fn write_message(&mut self, message: Message) -> Result<(), DomainError>;
}

/// A link in the request-handling chain.
///
/// The returned code follows the chain convention: when it is one of
/// SERVFAIL, REFUSED, FORMERR or NOTIMP the handler has not written to the
/// sink and the caller is expected to reply on its behalf.
#[async_trait]
pub trait DnsHandler: Send + Sync {
    fn name(&self) -> &str;

    async fn serve_dns(
        &self,
        request: &Message,
        sink: &mut dyn ResponseSink,
    ) -> Result<ResponseCode, DomainError>;
}

/// Sink that keeps the last written message in memory.
#[derive(Debug, Default)]
pub struct BufferedSink {
    message: Option<Message>,
}

impl BufferedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_written(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn into_message(self) -> Option<Message> {
        self.message
    }
}

#[async_trait]
impl ResponseSink for BufferedSink {
    async fn write_message(&mut self, message: Message) -> Result<(), DomainError> {
        self.message = Some(message);
        Ok(())
    }
}
