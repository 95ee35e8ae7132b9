use ferrous_txt_application::ports::QueryResponse;
use ferrous_txt_domain::QueryConfig;
use ferrous_txt_infrastructure::dns::ResponseParser;
use hickory_proto::op::MessageType;
use hickory_proto::rr::Record;
use std::fmt;

/// `Server:`, `Recursive:` and `edns0:` status lines.
pub struct Settings<'a>(pub &'a QueryConfig);

impl fmt::Display for Settings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.0;

        f.write_str("Server: ")?;
        for (i, server) in config.nameservers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", server)?;
        }
        writeln!(f)?;

        writeln!(f, "Recursive: {}", config.recursive)?;
        writeln!(f, "edns0: {}", config.edns_payload_size)
    }
}

/// Numbered answers followed by a dig-style dump of the whole response.
pub struct Report<'a>(pub &'a QueryResponse);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let response = self.0;
        let message = &response.message;

        writeln!(f, "----- answers -----")?;
        for (i, record) in response.answers().iter().enumerate() {
            writeln!(f, "{}: {}", i, record)?;
        }

        writeln!(f, "----- response -----")?;
        writeln!(
            f,
            ";; opcode: {:?}, status: {}, id: {}",
            message.op_code(),
            ResponseParser::rcode_to_status(response.response_code()),
            message.id()
        )?;
        writeln!(
            f,
            ";; flags: {}; server: {}, protocol: {}",
            self.flags().join(" "),
            response.server,
            response.protocol_used
        )?;

        writeln!(f, ";; QUESTION SECTION:")?;
        for query in message.queries() {
            writeln!(
                f,
                ";{}\t{}\t{}",
                query.name(),
                query.query_class(),
                query.query_type()
            )?;
        }

        write_section(f, "ANSWER", response.answers())?;
        write_section(f, "AUTHORITY", message.name_servers())?;
        write_section(f, "ADDITIONAL", message.additionals())
    }
}

impl Report<'_> {
    fn flags(&self) -> Vec<&'static str> {
        let response = self.0;
        let message = &response.message;

        [
            (message.message_type() == MessageType::Response, "qr"),
            (message.authoritative(), "aa"),
            (response.truncated(), "tc"),
            (message.recursion_desired(), "rd"),
            (response.recursion_available(), "ra"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, records: &[Record]) -> fmt::Result {
    if records.is_empty() {
        return Ok(());
    }

    writeln!(f, ";; {} SECTION:", title)?;
    for record in records {
        writeln!(f, "{}", record)?;
    }
    Ok(())
}
