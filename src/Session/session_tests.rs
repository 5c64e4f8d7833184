#[cfg(test)]
mod tests {
    use crate::ResponseParser::parser::{ParserError, ResponseParser};
    use crate::Session::chat_session::{ChemySession, SessionError};
    use crate::Session::confirmed::ConfirmedMaterial;
    use crate::Session::prompt::Role;
    use chrono::{DateTime, TimeZone, Utc};

    const RESPONSE: &str = "POSSIBILITY 1:
REACTION NAME:
Neutralisation
REACTION EQUATION:
NaOH + HCl -> NaCl + H2O
MATERIALS:
- Sodium hydroxide
- Hydrochloric acid
PROCEDURE:
1. Titrate
POSSIBILITY 2:
REACTION EQUATION:
KOH + HCl -> KCl + H2O
";

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap()
    }

    #[test]
    fn test_successful_response_updates_state() {
        let mut session = ChemySession::new();
        let mut parser = ResponseParser::with_seed(5);
        session.record_user_input(" neutralise an acid ", at(0));
        let count = session.apply_response(RESPONSE, &mut parser, at(1)).unwrap();

        assert_eq!(count, 2);
        assert_eq!(session.possibilities.len(), 2);
        assert_eq!(session.chat_history.len(), 2);
        assert_eq!(session.chat_history[0].role, Role::User);
        assert_eq!(session.chat_history[0].content, "neutralise an acid");
        assert_eq!(session.chat_history[1].role, Role::Assistant);
        assert_eq!(session.last_response.as_ref().unwrap().content, RESPONSE);
        assert!(session.error.is_none());
        assert!(session.selected_possibility().is_none());
    }

    #[test]
    fn test_failed_response_keeps_previous_possibilities() {
        let mut session = ChemySession::new();
        let mut parser = ResponseParser::with_seed(5);
        session.apply_response(RESPONSE, &mut parser, at(1)).unwrap();

        let err = session
            .apply_response("I am not able to answer that.", &mut parser, at(2))
            .unwrap_err();
        assert_eq!(err, SessionError::Parser(ParserError::SegmentationEmpty));
        assert_eq!(session.possibilities.len(), 2);

        let error = session.error.as_ref().unwrap();
        assert_eq!(error.role, Role::System);
        assert_eq!(error.content, "Error: No valid chemical possibilities found");
        assert_eq!(session.chat_history.last().unwrap(), error);

        // next query clears the error
        session.record_user_input("try again", at(3));
        assert!(session.error.is_none());
    }

    #[test]
    fn test_select_and_confirm() {
        let mut session = ChemySession::new();
        let mut parser = ResponseParser::with_seed(6);
        session.apply_response(RESPONSE, &mut parser, at(0)).unwrap();

        assert_eq!(
            session.confirm_selected(at(1)).unwrap_err(),
            SessionError::NoSelection
        );
        assert_eq!(
            session.select(2).unwrap_err(),
            SessionError::PossibilityOutOfRange { index: 2, len: 2 }
        );

        let name = session.select(0).unwrap().name.clone();
        assert_eq!(name, "Neutralisation");

        let confirmed = session.confirm_selected(at(10)).unwrap();
        assert_eq!(confirmed.id, at(10).timestamp_millis());
        assert_eq!(confirmed.reaction.name, "Neutralisation");
        assert_eq!(confirmed.reaction.equation, "NaOH + HCl -> NaCl + H2O");
        assert_eq!(
            confirmed.synthesis.materials,
            vec!["Sodium hydroxide", "Hydrochloric acid"]
        );
        assert_eq!(confirmed.synthesis.procedure, vec!["Titrate"]);
        assert_eq!(confirmed.thermodynamics.len(), 4);
        assert_eq!(confirmed.metrics, session.possibilities[0].metrics);
    }

    #[test]
    fn test_confirmed_material_json_layout() {
        let mut parser = ResponseParser::with_seed(2);
        let possibilities = parser.parse(RESPONSE).unwrap();
        let confirmed = ConfirmedMaterial::from_possibility(&possibilities[1], at(0));
        let json = serde_json::to_value(&confirmed).unwrap();
        assert_eq!(json["reaction"]["equation"], "KOH + HCl -> KCl + H2O");
        assert_eq!(json["conditions"]["pH"], "6.5-8.2");
        assert!(json["synthesis"]["equipment"].is_array());
        assert!(json["metrics"]["costIndex"].is_string());

        let back: ConfirmedMaterial = serde_json::from_value(json).unwrap();
        assert_eq!(back, confirmed);
    }

    #[test]
    fn test_clear_history() {
        let mut session = ChemySession::new();
        let mut parser = ResponseParser::with_seed(1);
        session.record_user_input("q", at(0));
        session.apply_response(RESPONSE, &mut parser, at(1)).unwrap();
        session.select(1).unwrap();
        session.clear_history();
        assert_eq!(session, ChemySession::default());
    }
}
