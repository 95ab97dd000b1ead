use super::message_builder::MessageBuilder;
use hickory_proto::op::{Message, ResponseCode};
use kube_extdns_application::ports::{BufferedSink, DnsHandler};
use kube_extdns_application::services::client_wrote;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Runs raw DNS datagrams through the handler chain.
pub struct DnsServerHandler {
    chain: Arc<dyn DnsHandler>,
}

impl DnsServerHandler {
    pub fn new(chain: Arc<dyn DnsHandler>) -> Self {
        Self { chain }
    }

    /// Returns the encoded reply, or `None` when the datagram is dropped.
    pub async fn handle_raw(&self, bytes: &[u8]) -> Option<Vec<u8>> {
        let request = match Message::from_vec(bytes) {
            Ok(request) => request,
            Err(e) => {
                if bytes.len() < 2 {
                    debug!(len = bytes.len(), "Dropping datagram too short for an id");
                    return None;
                }
                warn!(error = %e, "Failed to parse DNS request");
                let id = u16::from_be_bytes([bytes[0], bytes[1]]);
                return Self::encode(&MessageBuilder::format_error(id));
            }
        };

        let mut sink = BufferedSink::new();
        let reply = match self.chain.serve_dns(&request, &mut sink).await {
            Ok(rcode) => match sink.into_message() {
                Some(message) if client_wrote(rcode) => message,
                _ => {
                    debug!(rcode = ?rcode, "Handler chain wrote nothing, sending error reply");
                    MessageBuilder::error(&request, Self::error_code(rcode))
                }
            },
            Err(e) => {
                error!(error = %e, handler = self.chain.name(), "Handler chain failed");
                MessageBuilder::error(&request, ResponseCode::ServFail)
            }
        };

        Self::encode(&reply)
    }

    /// A handler that reports success without writing still gets a reply.
    fn error_code(rcode: ResponseCode) -> ResponseCode {
        if client_wrote(rcode) {
            ResponseCode::ServFail
        } else {
            rcode
        }
    }

    fn encode(message: &Message) -> Option<Vec<u8>> {
        match MessageBuilder::serialize(message) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(error = %e, "Failed to encode DNS reply");
                None
            }
        }
    }
}
