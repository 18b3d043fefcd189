use medi_triage::assistant::{REPLY_HELP, REPLY_HOW, REPLY_PREDICT, REPLY_UNKNOWN};
use medi_triage::Assistant;
use pretty_assertions::assert_eq;

#[test]
fn conversation_transcript() {
    let mut a = Assistant::new();
    for msg in ["Can you predict my risk?", "", "HELP", "how does it work", "about"] {
        a.send(msg);
    }
    assert_eq!(
        a.transcript().to_vec(),
        vec![
            "You: Can you predict my risk?".to_string(),
            REPLY_PREDICT.to_string(),
            "You: HELP".to_string(),
            REPLY_HELP.to_string(),
            "You: how does it work".to_string(),
            REPLY_HOW.to_string(),
            "You: about".to_string(),
            REPLY_UNKNOWN.to_string(),
        ]
    );
}
