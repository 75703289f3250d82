//! Integration tests for binding and synchronization.

use metabind::bind::{resolve, FieldPath, FileIndex, FileRef};
use metabind::config::Settings;
use metabind::metadata::{InMemoryStore, MetadataStore, Value};
use metabind::render::Renderer;

fn file(name: &str) -> FileRef {
    FileRef::new(name)
}

fn yaml(text: &str) -> Value {
    serde_yaml::from_str(text).unwrap()
}

fn setup(docs: &[(&str, &str)]) -> (Renderer, InMemoryStore) {
    let mut store = InMemoryStore::new();
    for (name, metadata) in docs {
        store.insert(file(name), yaml(metadata));
    }
    let index = FileIndex::new(docs.iter().map(|(name, _)| file(name)));
    (Renderer::from_settings(&Settings::default(), index), store)
}

#[test]
fn note_b_scenario() {
    let index = FileIndex::new([file("noteA.md"), file("noteB.md")]);
    let target = resolve("noteB#meta.author", &file("noteA.md"), &index).unwrap();
    assert_eq!(target.file, file("noteB.md"));
    assert_eq!(target.field_path, FieldPath::from_segments(["meta", "author"]));
}

#[test]
fn cross_file_binding_reads_and_writes_other_note() {
    let (mut renderer, mut store) = setup(&[
        ("noteA.md", "{}"),
        ("noteB.md", "meta:\n  author: Ada"),
    ]);
    let mut field = renderer
        .render("INPUT[text:noteB#meta.author]", &file("noteA.md"), &store)
        .into_live()
        .unwrap();
    assert_eq!(field.value().unwrap(), Value::String("Ada".into()));

    renderer
        .edit(&mut field, Value::String("Grace".into()), &mut store)
        .unwrap();
    let path = FieldPath::parse("meta.author").unwrap();
    assert_eq!(
        store.read(&file("noteB.md"), &path),
        Some(Value::String("Grace".into()))
    );
}

#[test]
fn bogus_scenario_renders_placeholder() {
    let (mut renderer, store) = setup(&[("note.md", "{}")]);
    let rendered = renderer.render("INPUT[bogus]", &file("note.md"), &store);
    let placeholder = rendered.as_error().expect("placeholder");
    assert!(placeholder.message.contains("Unknown input field type 'bogus'"));
}

#[test]
fn idempotence_same_value_twice_enqueues_once() {
    let (mut renderer, mut store) = setup(&[("note.md", "done: false")]);
    let mut field = renderer
        .render("INPUT[toggle:done]", &file("note.md"), &store)
        .into_live()
        .unwrap();

    store.replace(&file("note.md"), yaml("done: true"));
    assert_eq!(renderer.deliver(&mut store), vec![field.uid()]);
    store.replace(&file("note.md"), yaml("done: true"));
    assert!(renderer.deliver(&mut store).is_empty());

    assert!(renderer.flush(&mut field).unwrap());
    assert!(!renderer.flush(&mut field).unwrap());
}

#[test]
fn reentrancy_own_write_is_not_reapplied() {
    let (mut renderer, mut store) = setup(&[("note.md", "title: a")]);
    let mut field = renderer
        .render("INPUT[text:title]", &file("note.md"), &store)
        .into_live()
        .unwrap();

    renderer
        .edit(&mut field, Value::String("b".into()), &mut store)
        .unwrap();
    assert_eq!(store.pending_changes(), 1);
    assert!(renderer.deliver(&mut store).is_empty());
    assert!(!renderer.flush(&mut field).unwrap());
    assert_eq!(field.value().unwrap(), Value::String("b".into()));
}

#[test]
fn last_write_wins_before_drain() {
    let (mut renderer, mut store) = setup(&[("note.md", "count: 1")]);
    let mut field = renderer
        .render("INPUT[slider:count]", &file("note.md"), &store)
        .into_live()
        .unwrap();

    store.replace(&file("note.md"), yaml("count: 2"));
    store.replace(&file("note.md"), yaml("count: 3"));
    renderer.deliver(&mut store);

    assert!(renderer.flush(&mut field).unwrap());
    assert_eq!(field.value().unwrap(), Value::from(3));
    assert!(!renderer.flush(&mut field).unwrap());
}

#[test]
fn two_entries_on_same_field_both_update() {
    let (mut renderer, mut store) = setup(&[("note.md", "status: todo")]);
    let mut first = renderer
        .render("INPUT[select(option(todo), option(done)):status]", &file("note.md"), &store)
        .into_live()
        .unwrap();
    let mut second = renderer
        .render("INPUT[text:status]", &file("note.md"), &store)
        .into_live()
        .unwrap();

    store.replace(&file("note.md"), yaml("status: done"));
    let updated = renderer.deliver(&mut store);
    assert_eq!(updated, vec![first.uid(), second.uid()]);

    renderer.flush(&mut first).unwrap();
    renderer.flush(&mut second).unwrap();
    assert_eq!(first.value().unwrap(), Value::String("done".into()));
    assert_eq!(second.value().unwrap(), Value::String("done".into()));
}

#[test]
fn edit_in_one_entry_reaches_the_other() {
    let (mut renderer, mut store) = setup(&[("note.md", "status: todo")]);
    let mut first = renderer
        .render("INPUT[text:status]", &file("note.md"), &store)
        .into_live()
        .unwrap();
    let mut second = renderer
        .render("INPUT[text:status]", &file("note.md"), &store)
        .into_live()
        .unwrap();

    renderer
        .edit(&mut first, Value::String("done".into()), &mut store)
        .unwrap();
    assert_eq!(renderer.deliver(&mut store), vec![second.uid()]);
    renderer.flush(&mut second).unwrap();
    assert_eq!(second.view().display, "done");
}

#[test]
fn missing_field_yields_control_default() {
    let (mut renderer, mut store) = setup(&[("note.md", "meta:\n  author: Ada")]);
    let mut field = renderer
        .render("INPUT[text(defaultValue(anon)):meta.author]", &file("note.md"), &store)
        .into_live()
        .unwrap();

    store.replace(&file("note.md"), yaml("other: 1"));
    renderer.deliver(&mut store);
    renderer.flush(&mut field).unwrap();
    assert_eq!(field.value().unwrap(), Value::String("anon".into()));
}

#[test]
fn unmounted_fields_drop_updates() {
    let (mut renderer, mut store) = setup(&[("note.md", "done: false")]);
    let field = renderer
        .render("INPUT[toggle:done]", &file("note.md"), &store)
        .into_live()
        .unwrap();
    renderer.unmount(field);

    store.replace(&file("note.md"), yaml("done: true"));
    assert!(renderer.deliver(&mut store).is_empty());
}

#[test]
fn edit_after_queued_external_value_keeps_the_edit() {
    let (mut renderer, mut store) = setup(&[("note.md", "title: start")]);
    let mut field = renderer
        .render("INPUT[text:title]", &file("note.md"), &store)
        .into_live()
        .unwrap();

    store.replace(&file("note.md"), yaml("title: w"));
    assert_eq!(renderer.deliver(&mut store), vec![field.uid()]);
    renderer
        .edit(&mut field, Value::String("v".into()), &mut store)
        .unwrap();
    renderer.flush(&mut field).unwrap();
    renderer.deliver(&mut store);
    renderer.flush(&mut field).unwrap();

    let path = FieldPath::parse("title").unwrap();
    assert_eq!(field.value().unwrap(), Value::String("v".into()));
    assert_eq!(store.read(&file("note.md"), &path), Some(field.value().unwrap()));
}

#[test]
fn quick_successive_edits_are_not_echoed_back() {
    let (mut renderer, mut store) = setup(&[("note.md", "count: 0")]);
    let mut field = renderer
        .render("INPUT[slider(maxValue(10)):count]", &file("note.md"), &store)
        .into_live()
        .unwrap();

    renderer.edit(&mut field, Value::from(5), &mut store).unwrap();
    renderer.edit(&mut field, Value::from(6), &mut store).unwrap();
    assert!(renderer.deliver(&mut store).is_empty());
    assert!(!renderer.flush(&mut field).unwrap());
    assert_eq!(field.value().unwrap(), Value::from(6));
}
