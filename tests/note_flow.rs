use notemark::api::NotesApi;
use notemark::auth::memory::InMemoryAuth;
use notemark::auth::{AuthProvider, Session};
use notemark::buffer::TextEdit;
use notemark::config::NotemarkConfig;
use notemark::markup::{RecordingSink, StyleAttributes};
use notemark::store::InMemoryDocumentStore;

#[test]
fn signed_in_user_edits_a_styled_note() {
    let auth = InMemoryAuth::new();
    let mut session = Session::new();
    session.listen(&auth);
    assert!(session.is_anonymous());

    auth.sign_up("ada@example.com", "hunter22").unwrap();
    assert!(session.poll());
    let user = session.require_user().unwrap().clone();

    let api = NotesApi::new(
        InMemoryDocumentStore::in_memory(),
        user,
        &NotemarkConfig::default(),
    );
    let notes = api.subscribe().unwrap();
    assert!(notes.latest().unwrap().is_empty());

    let id = api.add_note().unwrap().created.unwrap();
    let mut editor = api.open_note(&id.to_string()).unwrap();
    editor.apply(&TextEdit::insert(0, "Hello #uworld#u today"));

    let mut sink = RecordingSink::default();
    editor.annotations().apply_to(&mut sink);
    assert_eq!(sink.len, 21);
    assert_eq!(
        sink.calls,
        vec![
            (0..5, StyleAttributes::body()),
            (8..13, StyleAttributes::underline()),
        ]
    );
    assert_eq!(editor.close(), 0);

    let latest = notes.latest().unwrap();
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].text, "Hello #uworld#u today");

    session.sign_out(&auth).unwrap();
    assert!(session.is_anonymous());
    assert!(auth.current_user().is_none());
}
