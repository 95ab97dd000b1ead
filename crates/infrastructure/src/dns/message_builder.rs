//! DNS reply construction
//!
//! Every reply built here echoes the request id, opcode, recursion desired
//! flag and question section.

use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, SOA};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use kube_extdns_domain::{AddressRecord, DomainError};

const SOA_REFRESH: i32 = 7200;
const SOA_RETRY: i32 = 1800;
const SOA_EXPIRE: i32 = 86400;
/// Upper bound for the SOA record's own ttl; `minimum` still carries the
/// configured ttl.
const SOA_MAX_TTL: u32 = 300;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Authoritative NOERROR reply carrying exactly `records` in the answer
    /// section.
    pub fn answer(request: &Message, records: &[AddressRecord]) -> Result<Message, DomainError> {
        let mut reply = Self::reply_to(request);
        reply.set_authoritative(true);

        let mut answers = Vec::with_capacity(records.len());
        for record in records {
            let name = Self::parse_name(&record.name)?;
            answers.push(Record::from_rdata(
                name,
                record.ttl,
                RData::A(A(record.address)),
            ));
        }
        reply.add_answers(answers);

        Ok(reply)
    }

    /// Authoritative NOERROR reply with no answers and the SOA of `zone` in
    /// the authority section.
    pub fn backend_error(
        request: &Message,
        zone: &str,
        serial: u32,
        ttl: u32,
    ) -> Result<Message, DomainError> {
        let zone_name = Self::parse_name(zone)?;
        let mname = Self::parse_name(&Self::child_of("ns.dns", zone))?;
        let rname = Self::parse_name(&Self::child_of("hostmaster", zone))?;

        let soa = SOA::new(
            mname,
            rname,
            serial,
            SOA_REFRESH,
            SOA_RETRY,
            SOA_EXPIRE,
            ttl,
        );

        let mut reply = Self::reply_to(request);
        reply.set_authoritative(true);
        reply.add_name_server(Record::from_rdata(
            zone_name,
            ttl.min(SOA_MAX_TTL),
            RData::SOA(soa),
        ));

        Ok(reply)
    }

    /// Non-authoritative reply with `rcode` and nothing but the question.
    pub fn error(request: &Message, rcode: ResponseCode) -> Message {
        let mut reply = Self::reply_to(request);
        reply.set_response_code(rcode);
        reply
    }

    /// FORMERR for a request that could not be decoded past its id.
    pub fn format_error(id: u16) -> Message {
        let mut reply = Message::new(id, MessageType::Response, OpCode::Query);
        reply.set_response_code(ResponseCode::FormErr);
        reply
    }

    /// Serialize a Message to wire format bytes
    pub fn serialize(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }

    fn reply_to(request: &Message) -> Message {
        let mut reply = Message::new(request.id(), MessageType::Response, request.op_code());
        reply.set_recursion_desired(request.recursion_desired());
        reply.add_queries(request.queries().iter().cloned());
        reply
    }

    fn child_of(label: &str, zone: &str) -> String {
        if zone == "." {
            format!("{}.", label)
        } else {
            format!("{}.{}", label, zone)
        }
    }

    fn parse_name(name: &str) -> Result<Name, DomainError> {
        Name::from_ascii(name).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", name, e))
        })
    }
}
