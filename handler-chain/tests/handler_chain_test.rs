//! Integration tests for [`handler_chain::HandlerChain`].
//!
//! Covers: before/after ordering, a before hook stopping the chain, the first Reply ending the handle phase
//! and reaching every after hook, and Continue/Ignore falling through to later handlers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use dbot_core::{Chat, Handler, HandlerResponse, Message, MessageDirection, User};
use handler_chain::HandlerChain;

fn create_test_message(content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    }
}

/// Replies with a fixed text when the message starts with its command; otherwise continues.
struct CommandReplyHandler {
    command: &'static str,
    reply: &'static str,
    handle_count: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl Handler for CommandReplyHandler {
    async fn handle(&self, message: &Message) -> dbot_core::Result<HandlerResponse> {
        self.handle_count.fetch_add(1, Ordering::SeqCst);
        if message.content.starts_with(self.command) {
            Ok(HandlerResponse::Reply(self.reply.to_string()))
        } else {
            Ok(HandlerResponse::Continue)
        }
    }
}

/// Records before/after calls into a shared log.
struct RecordingHandler {
    name: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

#[async_trait::async_trait]
impl Handler for RecordingHandler {
    async fn before(&self, _message: &Message) -> dbot_core::Result<bool> {
        self.log.lock().unwrap().push(format!("before_{}", self.name));
        Ok(true)
    }

    async fn after(&self, _message: &Message, response: &HandlerResponse) -> dbot_core::Result<()> {
        let tag = match response {
            HandlerResponse::Reply(text) => format!("after_{}:{}", self.name, text),
            other => format!("after_{}:{:?}", self.name, other),
        };
        self.log.lock().unwrap().push(tag);
        Ok(())
    }
}

#[tokio::test]
async fn test_empty_chain_continues() {
    let chain = HandlerChain::new();
    assert!(chain.is_empty());

    let result = chain.handle(&create_test_message("/start")).await.unwrap();
    assert_eq!(result, HandlerResponse::Continue);
}

/// **Test: First matching handler replies; later handlers do not run.**
#[tokio::test]
async fn test_first_reply_ends_handle_phase() {
    let start_count = Arc::new(AtomicUsize::new(0));
    let help_count = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CommandReplyHandler {
            command: "/start",
            reply: "welcome",
            handle_count: start_count.clone(),
        }))
        .add_handler(Arc::new(CommandReplyHandler {
            command: "/help",
            reply: "help",
            handle_count: help_count.clone(),
        }));
    assert_eq!(chain.len(), 2);

    let result = chain.handle(&create_test_message("/start")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("welcome".to_string()));
    assert_eq!(start_count.load(Ordering::SeqCst), 1);
    assert_eq!(help_count.load(Ordering::SeqCst), 0);
}

/// **Test: Continue falls through to the next handler.**
#[tokio::test]
async fn test_continue_falls_through() {
    let start_count = Arc::new(AtomicUsize::new(0));
    let help_count = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CommandReplyHandler {
            command: "/start",
            reply: "welcome",
            handle_count: start_count.clone(),
        }))
        .add_handler(Arc::new(CommandReplyHandler {
            command: "/help",
            reply: "help",
            handle_count: help_count.clone(),
        }));

    let result = chain.handle(&create_test_message("/help")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("help".to_string()));
    assert_eq!(start_count.load(Ordering::SeqCst), 1);
    assert_eq!(help_count.load(Ordering::SeqCst), 1);
}

/// **Test: A before hook returning false stops the chain; handle is not run.**
#[tokio::test]
async fn test_before_false_stops_chain() {
    struct BlockingHandler;

    #[async_trait::async_trait]
    impl Handler for BlockingHandler {
        async fn before(&self, _message: &Message) -> dbot_core::Result<bool> {
            Ok(false)
        }
    }

    let handle_count = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(BlockingHandler))
        .add_handler(Arc::new(CommandReplyHandler {
            command: "/start",
            reply: "welcome",
            handle_count: handle_count.clone(),
        }));

    let result = chain.handle(&create_test_message("/start")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(handle_count.load(Ordering::SeqCst), 0);
}

/// **Test: before runs first→last, after runs last→first and sees the reply text.**
#[tokio::test]
async fn test_before_after_order_with_reply() {
    let log = Arc::new(Mutex::new(Vec::new()));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(RecordingHandler {
            name: "first",
            log: log.clone(),
        }))
        .add_handler(Arc::new(RecordingHandler {
            name: "second",
            log: log.clone(),
        }))
        .add_handler(Arc::new(CommandReplyHandler {
            command: "/start",
            reply: "welcome",
            handle_count: Arc::new(AtomicUsize::new(0)),
        }));

    chain.handle(&create_test_message("/start")).await.unwrap();

    let executed = log.lock().unwrap();
    assert_eq!(
        *executed,
        vec![
            "before_first",
            "before_second",
            "after_second:welcome",
            "after_first:welcome",
        ]
    );
}

/// **Test: Ignore is treated like Continue; a later handler still replies.**
#[tokio::test]
async fn test_ignore_skips_to_next_handler() {
    struct IgnoreHandler;

    #[async_trait::async_trait]
    impl Handler for IgnoreHandler {
        async fn handle(&self, _message: &Message) -> dbot_core::Result<HandlerResponse> {
            Ok(HandlerResponse::Ignore)
        }
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(IgnoreHandler))
        .add_handler(Arc::new(CommandReplyHandler {
            command: "/help",
            reply: "help",
            handle_count: Arc::new(AtomicUsize::new(0)),
        }));

    let result = chain.handle(&create_test_message("/help")).await.unwrap();
    assert_eq!(result, HandlerResponse::Reply("help".to_string()));
}
