#![allow(dead_code)]

use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use kube_extdns_application::ports::{DnsHandler, ResponseSink};
use kube_extdns_domain::DomainError;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Terminal handler that counts calls and optionally writes an empty reply.
pub struct RecordingHandler {
    rcode: ResponseCode,
    write_reply: bool,
    calls: AtomicUsize,
}

impl RecordingHandler {
    pub fn replying(rcode: ResponseCode) -> Self {
        Self {
            rcode,
            write_reply: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn silent(rcode: ResponseCode) -> Self {
        Self {
            rcode,
            write_reply: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DnsHandler for RecordingHandler {
    fn name(&self) -> &str {
        "recording"
    }

    async fn serve_dns(
        &self,
        request: &Message,
        sink: &mut dyn ResponseSink,
    ) -> Result<ResponseCode, DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.write_reply {
            let mut reply = Message::new(request.id(), MessageType::Response, request.op_code());
            reply.set_response_code(self.rcode);
            sink.write_message(reply).await?;
        }
        Ok(self.rcode)
    }
}
