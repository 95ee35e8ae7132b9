use hickory_proto::op::{Message, MessageType};
use hickory_proto::rr::rdata::TXT;
use hickory_proto::rr::{RData, Record};

/// Builds a wire response to `query_bytes`: same ID and question, RD copied,
/// RA as given, and one TXT answer per text unless `truncated` is set.
pub fn reply_to(
    query_bytes: &[u8],
    texts: &[&str],
    truncated: bool,
    recursion_available: bool,
) -> Vec<u8> {
    let query = Message::from_vec(query_bytes).expect("mock received an unparseable query");

    let mut response = Message::new(query.id(), MessageType::Response, query.op_code());
    response.set_recursion_desired(query.recursion_desired());
    response.set_recursion_available(recursion_available);
    response.set_truncated(truncated);

    for question in query.queries() {
        response.add_query(question.clone());
    }

    if !truncated {
        if let Some(question) = query.queries().first() {
            for text in texts {
                response.add_answer(Record::from_rdata(
                    question.name().clone(),
                    300,
                    RData::TXT(TXT::new(vec![text.to_string()])),
                ));
            }
        }
    }

    response.to_vec().expect("mock response must serialize")
}

/// Flattens every TXT answer into one string per record.
pub fn answer_texts(message: &Message) -> Vec<String> {
    message
        .answers()
        .iter()
        .filter_map(|record| match record.data() {
            RData::TXT(txt) => Some(
                txt.iter()
                    .map(|part| String::from_utf8_lossy(part).into_owned())
                    .collect::<String>(),
            ),
            _ => None,
        })
        .collect()
}
