//! Property-based tests for session state
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use crate::agent::testing::MockGateway;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::User), Just(Role::Assistant)]
}

fn arb_message() -> impl Strategy<Value = Message> {
    (arb_role(), "[a-zA-Z0-9 <>&\n]{0,40}").prop_map(|(role, content)| Message::new(role, content))
}

fn arb_tool() -> impl Strategy<Value = Tool> {
    prop_oneof![Just(Tool::WebSearch), Just(Tool::FileSearch)]
}

/// Store operations: `Some` appends, `None` clears
fn arb_store_ops() -> impl Strategy<Value = Vec<Option<Message>>> {
    proptest::collection::vec(
        prop_oneof![
            8 => arb_message().prop_map(Some),
            1 => Just(None),
        ],
        0..50,
    )
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn store_preserves_insertion_order(ops in arb_store_ops()) {
        let mut store = ConversationStore::default();
        let mut expected: Vec<Message> = Vec::new();

        for op in ops {
            match op {
                Some(message) => {
                    store.append(message.clone());
                    expected.push(message);
                }
                None => {
                    store.clear();
                    expected.clear();
                }
            }
        }

        prop_assert_eq!(store.len(), expected.len());
        prop_assert_eq!(store.all(), expected.as_slice());
    }

    #[test]
    fn can_send_iff_any_tool_enabled(web in any::<bool>(), file in any::<bool>()) {
        let config = ToolConfig { web_search: web, file_search: file };
        prop_assert_eq!(config.can_send(), web || file);
        prop_assert_eq!(config.enabled_tools().len(), usize::from(web) + usize::from(file));
    }

    #[test]
    fn toggles_only_touch_their_flag(
        toggles in proptest::collection::vec((arb_tool(), any::<bool>()), 0..20)
    ) {
        let mut config = ToolConfig::default();
        for (tool, enabled) in toggles {
            let other = if tool == Tool::WebSearch { Tool::FileSearch } else { Tool::WebSearch };
            let before = config.is_enabled(other);
            config.set_enabled(tool, enabled);
            prop_assert_eq!(config.is_enabled(tool), enabled);
            prop_assert_eq!(config.is_enabled(other), before);
        }
    }

    #[test]
    fn rejected_ask_leaves_session_untouched(
        history in proptest::collection::vec(arb_message(), 0..10),
        question in "[a-z ]{1,20}",
    ) {
        let gateway = MockGateway::new();
        gateway.queue_answer("unused");

        let mut session = SessionState::new();
        for message in &history {
            session.append(message.clone());
        }
        session.set_tool_enabled(Tool::WebSearch, false);
        session.set_tool_enabled(Tool::FileSearch, false);

        let result = block_on(session.ask(&gateway, &question));

        prop_assert!(matches!(result, Err(SessionError::NoToolSelected)));
        prop_assert_eq!(session.messages(), history.as_slice());
        prop_assert_eq!(gateway.call_count(), 0);
    }

    #[test]
    fn each_end_appends_one_terminal_message(
        history in proptest::collection::vec(arb_message(), 0..10),
        ends in 1usize..5,
    ) {
        let mut session = SessionState::new();
        for message in &history {
            session.append(message.clone());
        }

        for i in 1..=ends {
            session.end();
            prop_assert!(!session.is_active());
            prop_assert_eq!(session.messages().len(), history.len() + i);
            let last = session.messages().last().unwrap();
            prop_assert_eq!(last.role(), Role::Assistant);
            prop_assert_eq!(last.content(), END_OF_CONVERSATION);
        }
    }

    #[test]
    fn successful_turn_adds_exactly_two_messages(
        questions in proptest::collection::vec("[a-z]{1,10}", 1..5),
    ) {
        let gateway = MockGateway::new();
        for (i, _) in questions.iter().enumerate() {
            gateway.queue_answer(format!("answer {i}"));
        }

        let mut session = SessionState::new();
        for (i, question) in questions.iter().enumerate() {
            let answer = block_on(session.ask(&gateway, question)).unwrap();
            prop_assert_eq!(&answer, &format!("answer {i}"));
            prop_assert_eq!(session.messages().len(), 2 * (i + 1));
            prop_assert_eq!(&session.messages()[2 * i], &Message::user(question.clone()));
            prop_assert_eq!(&session.messages()[2 * i + 1], &Message::assistant(answer));
        }
    }
}
