//! Candidate extraction from the conversion service's XML body.
//!
//! Candidates live at a fixed path:
//! `ResultSet/Result/SegmentList/Segment[0]/CandidateList/Candidate`.
//! Only the first segment's candidates are collected, in document order.

use kanapix_types::Candidate;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::ConvertError;

const SEGMENT_PATH: [&str; 3] = ["ResultSet", "Result", "SegmentList"];
const CANDIDATE_PATH: [&str; 6] = [
    "ResultSet",
    "Result",
    "SegmentList",
    "Segment",
    "CandidateList",
    "Candidate",
];

/// Walk the document and collect first-segment candidate text nodes.
/// A response missing the expected path is a well-formed empty result;
/// only XML the reader cannot parse is an error.
pub fn parse_candidates(body: &str) -> Result<Vec<Candidate>, ConvertError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut path: Vec<String> = Vec::new();
    let mut segments_seen = 0usize;
    let mut candidates = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if name == "Segment" && path_is(&path, &SEGMENT_PATH) {
                    segments_seen += 1;
                }
                path.push(name);
            }
            Ok(Event::End(_)) => {
                path.pop();
            }
            Ok(Event::Text(e)) => {
                if segments_seen == 1 && path_is(&path, &CANDIDATE_PATH) {
                    let text = e
                        .unescape()
                        .map_err(|e| ConvertError::Parse(e.to_string()))?;
                    candidates.push(text.into_owned());
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(ConvertError::Parse(e.to_string())),
        }
    }

    Ok(candidates)
}

fn path_is(path: &[String], expected: &[&str]) -> bool {
    path.len() == expected.len() && path.iter().zip(expected).all(|(a, b)| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAKURA_FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ResultSet>
  <Result>
    <SegmentList>
      <Segment>
        <SegmentText>さくら</SegmentText>
        <CandidateList>
          <Candidate>桜</Candidate>
          <Candidate>佐倉</Candidate>
        </CandidateList>
      </Segment>
    </SegmentList>
  </Result>
</ResultSet>"#;

    #[test]
    fn extracts_candidates_in_document_order() {
        let candidates = parse_candidates(SAKURA_FIXTURE).unwrap();
        assert_eq!(candidates, vec!["桜", "佐倉"]);
    }

    #[test]
    fn parsing_is_stateless_across_calls() {
        let first = parse_candidates(SAKURA_FIXTURE).unwrap();
        let second = parse_candidates(SAKURA_FIXTURE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn only_first_segment_is_collected() {
        let body = r#"<ResultSet><Result><SegmentList>
          <Segment><CandidateList><Candidate>桜</Candidate></CandidateList></Segment>
          <Segment><CandidateList><Candidate>咲く</Candidate><Candidate>裂く</Candidate></CandidateList></Segment>
        </SegmentList></Result></ResultSet>"#;

        let candidates = parse_candidates(body).unwrap();
        assert_eq!(candidates, vec!["桜"]);
    }

    #[test]
    fn missing_path_yields_empty_list() {
        let body = "<ResultSet><Error><Message>invalid appid</Message></Error></ResultSet>";
        let candidates = parse_candidates(body).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn empty_body_yields_empty_list() {
        let candidates = parse_candidates("").unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn malformed_xml_is_a_parse_error() {
        let body = "<ResultSet><Result><SegmentList></Result></ResultSet>";
        let err = parse_candidates(body).unwrap_err();
        assert!(matches!(err, ConvertError::Parse(_)));
    }

    #[test]
    fn candidate_text_is_unescaped() {
        let body = r#"<ResultSet><Result><SegmentList><Segment>
          <CandidateList><Candidate>&lt;桜&gt;</Candidate></CandidateList>
        </Segment></SegmentList></Result></ResultSet>"#;

        let candidates = parse_candidates(body).unwrap();
        assert_eq!(candidates, vec!["<桜>"]);
    }

    #[test]
    fn text_outside_candidate_path_is_ignored() {
        let body = r#"<ResultSet><Result><SegmentList><Segment>
          <SegmentText>さくら</SegmentText>
          <CandidateList><Candidate>桜</Candidate></CandidateList>
        </Segment></SegmentList></Result></ResultSet>"#;

        let candidates = parse_candidates(body).unwrap();
        assert_eq!(candidates, vec!["桜"]);
    }
}
