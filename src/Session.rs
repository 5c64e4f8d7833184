/// eng
/// Everything around a single parse that the caller owns: the system prompt
/// and outgoing message list, the chat session (history, current
/// possibilities, selection, last error) and the confirmed material record.
/// Network transport and persistence stay with the caller.
/// # Examples
/// ```
/// use Chemy::ResponseParser::parser::ResponseParser;
/// use Chemy::Session::chat_session::ChemySession;
/// use chrono::Utc;
/// let mut session = ChemySession::new();
/// let mut parser = ResponseParser::with_seed(1);
/// session.record_user_input("synthesise aspirin", Utc::now());
/// let n = session
///     .apply_response("POSSIBILITY 1:\nREACTION EQUATION:\nC7H6O3 + C4H6O3 -> C9H8O4 + C2H4O2\n", &mut parser, Utc::now())
///     .unwrap();
/// assert_eq!(n, 1);
/// session.select(0).unwrap();
/// let confirmed = session.confirm_selected(Utc::now()).unwrap();
/// assert_eq!(confirmed.reaction.equation, "C7H6O3 + C4H6O3 -> C9H8O4 + C2H4O2");
/// ```
pub mod chat_session;
pub mod confirmed;
pub mod prompt;
mod session_tests;
