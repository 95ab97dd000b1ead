use crate::dns::message_builder::MessageBuilder;
use crate::dns::transport::udp::UdpTransport;
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use kube_extdns_application::ports::{DnsHandler, ResponseSink};
use kube_extdns_domain::DomainError;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Terminal handler relaying requests to upstream resolvers, tried in order.
pub struct UpstreamForwarder {
    upstreams: Vec<Arc<dyn DnsTransport>>,
    timeout: Duration,
}

impl UpstreamForwarder {
    pub fn new(upstreams: Vec<Arc<dyn DnsTransport>>, timeout: Duration) -> Self {
        Self { upstreams, timeout }
    }

    pub fn udp(servers: &[SocketAddr], timeout: Duration) -> Self {
        let upstreams = servers
            .iter()
            .map(|addr| Arc::new(UdpTransport::new(*addr)) as Arc<dyn DnsTransport>)
            .collect();
        Self::new(upstreams, timeout)
    }

    pub fn upstream_count(&self) -> usize {
        self.upstreams.len()
    }

    async fn exchange(
        &self,
        transport: &dyn DnsTransport,
        request_id: u16,
        request_bytes: &[u8],
    ) -> Result<Message, DomainError> {
        let response = transport.send(request_bytes, self.timeout).await?;

        let message = Message::from_vec(&response.bytes).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.id() != request_id {
            return Err(DomainError::TransportError {
                server: transport.server(),
                reason: format!(
                    "response id {} does not match request id {}",
                    message.id(),
                    request_id
                ),
            });
        }

        Ok(message)
    }
}

#[async_trait]
impl DnsHandler for UpstreamForwarder {
    fn name(&self) -> &str {
        "forward"
    }

    /// Writes the first valid upstream response. SERVFAIL means every
    /// upstream failed and nothing was written.
    async fn serve_dns(
        &self,
        request: &Message,
        sink: &mut dyn ResponseSink,
    ) -> Result<ResponseCode, DomainError> {
        let request_bytes = MessageBuilder::serialize(request)?;

        for transport in &self.upstreams {
            match self
                .exchange(transport.as_ref(), request.id(), &request_bytes)
                .await
            {
                Ok(response) => {
                    debug!(
                        server = %transport.server(),
                        protocol = transport.protocol_name(),
                        rcode = ?response.response_code(),
                        "Upstream answered"
                    );
                    sink.write_message(response).await?;
                    return Ok(ResponseCode::NoError);
                }
                Err(e) => {
                    warn!(server = %transport.server(), error = %e, "Upstream query failed");
                }
            }
        }

        warn!(
            upstreams = self.upstreams.len(),
            error = %DomainError::TransportAllServersUnreachable,
            "Forwarding failed"
        );
        Ok(ResponseCode::ServFail)
    }
}
