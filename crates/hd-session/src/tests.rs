use crate::*;
use std::time::Duration;

// ========== Session ==========

#[test]
fn test_session_create() {
    let s = Session::new("s1");
    assert_eq!(s.id, "s1");
    assert!(s.messages.is_empty());
    assert_eq!(s.to_string(), "Session(id=s1, messages=0)");
}

#[test]
fn test_add_message_order() {
    let mut s = Session::new("s1");
    s.add_message(Role::User, "q1");
    s.add_message(Role::Assistant, "a1");
    s.add_message(Role::User, "q2");
    let contents: Vec<_> = s.messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["q1", "a1", "q2"]);
    assert_eq!(s.message_count(), 3);
}

#[test]
fn test_session_clear() {
    let mut s = Session::new("s1");
    s.add_message(Role::User, "hi");
    s.clear();
    assert_eq!(s.message_count(), 0);
}

#[test]
fn test_last_user_message() {
    let mut s = Session::new("s1");
    assert!(s.last_user_message().is_none());
    s.add_message(Role::User, "first");
    s.add_message(Role::Assistant, "reply");
    assert_eq!(s.last_user_message().unwrap().content, "first");
    s.add_message(Role::User, "second");
    assert_eq!(last_user_message(&s.messages).unwrap().content, "second");
}

#[test]
fn test_message_ids_unique() {
    let a = Message::user("x");
    let b = Message::user("x");
    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("msg_"));
}

#[test]
fn test_role_serde() {
    let m = Message::system("be nice");
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["role"], "system");
    assert_eq!(Role::Assistant.to_string(), "assistant");
}

// ========== SessionManager ==========

#[tokio::test]
async fn test_append_then_get() {
    let mgr = SessionManager::new();
    mgr.append("s1", Message::user("hello")).await;
    let history = mgr.get("s1").await;
    assert_eq!(history.len(), 1);
    assert_eq!(history.last().unwrap().content, "hello");
}

#[tokio::test]
async fn test_sequential_appends_keep_order() {
    let mgr = SessionManager::new();
    mgr.append("s1", Message::user("one")).await;
    mgr.append("s1", Message::assistant("two")).await;
    let history = mgr.get("s1").await;
    assert_eq!(history[0].content, "one");
    assert_eq!(history[1].content, "two");
    assert_eq!(history[1].role, Role::Assistant);
}

#[tokio::test]
async fn test_clear_then_get() {
    let mgr = SessionManager::new();
    for i in 0..4 {
        mgr.append("s1", Message::user(format!("m{i}"))).await;
    }
    mgr.clear("s1").await;
    assert!(mgr.get("s1").await.is_empty());
}

#[tokio::test]
async fn test_clear_unknown_is_idempotent() {
    let mgr = SessionManager::new();
    mgr.clear("ghost").await;
    mgr.clear("ghost").await;
    assert!(mgr.get("ghost").await.is_empty());
}

#[tokio::test]
async fn test_get_unknown_does_not_create() {
    let mgr = SessionManager::new();
    assert!(mgr.get("nobody").await.is_empty());
    assert!(!mgr.contains("nobody"));
    assert_eq!(mgr.count(), 0);
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let mgr = SessionManager::new();
    mgr.append("a", Message::user("for a")).await;
    mgr.append("b", Message::user("for b")).await;
    assert_eq!(mgr.get("a").await.len(), 1);
    assert_eq!(mgr.get("b").await[0].content, "for b");
    assert_eq!(mgr.ids(), vec!["a".to_string(), "b".to_string()]);
}

#[tokio::test]
async fn test_get_returns_snapshot() {
    let mgr = SessionManager::new();
    mgr.append("s1", Message::user("one")).await;
    let snapshot = mgr.get("s1").await;
    mgr.append("s1", Message::user("two")).await;
    assert_eq!(snapshot.len(), 1);
}

#[tokio::test]
async fn test_lock_serializes_same_session() {
    let mgr = SessionManager::new();
    let mut guard = mgr.lock("s1").await;

    let mgr2 = mgr.clone();
    let writer = tokio::spawn(async move {
        mgr2.append("s1", Message::user("second")).await;
    });

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!writer.is_finished());

    guard.add_message(Role::User, "first");
    drop(guard);

    writer.await.unwrap();
    let history = mgr.get("s1").await;
    assert_eq!(history[0].content, "first");
    assert_eq!(history[1].content, "second");
}

#[tokio::test]
async fn test_lock_does_not_block_other_sessions() {
    let mgr = SessionManager::new();
    let _held = mgr.lock("busy").await;
    tokio::time::timeout(Duration::from_secs(1), mgr.append("free", Message::user("hi")))
        .await
        .expect("other session should not wait");
    assert_eq!(mgr.get("free").await.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends() {
    let mgr = SessionManager::new();
    let mut handles = Vec::new();
    for t in 0..4 {
        let mgr = mgr.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..50 {
                mgr.append("shared", Message::user(format!("{t}-{i}"))).await;
                mgr.append(&format!("own-{t}"), Message::user(format!("{i}"))).await;
            }
        }));
    }
    for h in handles {
        h.await.unwrap();
    }
    assert_eq!(mgr.get("shared").await.len(), 200);
    assert_eq!(mgr.count(), 5);
    for t in 0..4 {
        let own = mgr.get(&format!("own-{t}")).await;
        let order: Vec<_> = own.iter().map(|m| m.content.clone()).collect();
        let expected: Vec<_> = (0..50).map(|i| i.to_string()).collect();
        assert_eq!(order, expected);
    }
}
