#![allow(dead_code)]
use std::net::Ipv4Addr;

const TYPE_A: u16 = 1;
const TYPE_NS: u16 = 2;
const TYPE_CNAME: u16 = 5;
const TYPE_SOA: u16 = 6;
const TYPE_OPT: u16 = 41;

/// Hand-assembled DNS reply mirroring the question of a received query.
/// Names are written uncompressed.
pub struct ReplyBuilder {
    id: u16,
    flags: u16,
    question: Vec<u8>,
    answers: Vec<Vec<u8>>,
    authority: Vec<Vec<u8>>,
    additional: Vec<Vec<u8>>,
}

impl ReplyBuilder {
    pub fn for_query(query: &[u8]) -> Self {
        let id = u16::from_be_bytes([query[0], query[1]]);
        let rd = u16::from_be_bytes([query[2], query[3]]) & 0x0100;
        let end = question_end(query);
        Self {
            id,
            flags: 0x8000 | rd,
            question: query[12..end].to_vec(),
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn authoritative(mut self) -> Self {
        self.flags |= 0x0400;
        self
    }

    pub fn truncated(mut self) -> Self {
        self.flags |= 0x0200;
        self
    }

    pub fn rcode(mut self, rcode: u16) -> Self {
        self.flags = (self.flags & !0x000F) | (rcode & 0x000F);
        self
    }

    pub fn answer_a(mut self, owner: &str, ip: Ipv4Addr) -> Self {
        self.answers.push(record(owner, TYPE_A, 300, ip.octets().to_vec()));
        self
    }

    pub fn answer_ns(mut self, owner: &str, target: &str) -> Self {
        self.answers.push(record(owner, TYPE_NS, 518400, encode_name(target)));
        self
    }

    pub fn answer_cname(mut self, owner: &str, target: &str) -> Self {
        self.answers.push(record(owner, TYPE_CNAME, 300, encode_name(target)));
        self
    }

    pub fn authority_ns(mut self, zone: &str, target: &str) -> Self {
        self.authority.push(record(zone, TYPE_NS, 172800, encode_name(target)));
        self
    }

    pub fn authority_soa(mut self, zone: &str) -> Self {
        let mut rdata = encode_name(&format!("ns.{}", zone));
        rdata.extend(encode_name(&format!("hostmaster.{}", zone)));
        for value in [1u32, 1800, 900, 604800, 86400] {
            rdata.extend_from_slice(&value.to_be_bytes());
        }
        self.authority.push(record(zone, TYPE_SOA, 900, rdata));
        self
    }

    pub fn additional_a(mut self, owner: &str, ip: Ipv4Addr) -> Self {
        self.additional.push(record(owner, TYPE_A, 172800, ip.octets().to_vec()));
        self
    }

    pub fn additional_opt(mut self) -> Self {
        let mut opt = vec![0x00];
        opt.extend_from_slice(&TYPE_OPT.to_be_bytes());
        opt.extend_from_slice(&[0x04, 0xD0, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00]);
        self.additional.push(opt);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(512);
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        out.extend_from_slice(&1u16.to_be_bytes());
        for section in [&self.answers, &self.authority, &self.additional] {
            out.extend_from_slice(&(section.len() as u16).to_be_bytes());
        }
        out.extend_from_slice(&self.question);
        for section in [&self.answers, &self.authority, &self.additional] {
            for rr in section.iter() {
                out.extend_from_slice(rr);
            }
        }
        out
    }
}

/// Presentation form of the query's QNAME, with a trailing dot.
pub fn question_name(query: &[u8]) -> String {
    let mut pos = 12;
    let mut name = String::new();
    while pos < query.len() && query[pos] != 0 {
        let len = query[pos] as usize;
        name.push_str(&String::from_utf8_lossy(&query[pos + 1..pos + 1 + len]));
        name.push('.');
        pos += 1 + len;
    }
    if name.is_empty() {
        name.push('.');
    }
    name
}

fn question_end(query: &[u8]) -> usize {
    let mut pos = 12;
    while query[pos] != 0 {
        pos += 1 + query[pos] as usize;
    }
    pos + 1 + 4
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

fn record(owner: &str, rtype: u16, ttl: u32, rdata: Vec<u8>) -> Vec<u8> {
    let mut out = encode_name(owner);
    out.extend_from_slice(&rtype.to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&ttl.to_be_bytes());
    out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    out.extend(rdata);
    out
}
