//! Render boundary between declaration text and live controls.
//!
//! [`Renderer::render`] never fails. A declaration that does not parse is
//! rendered as an [`ErrorPlaceholder`] carrying the error message, so one
//! broken field never takes down the rest of the document.

use serde::Serialize;
use serde_yaml::Value;

use crate::bind::{FileIndex, FileRef};
use crate::config::Settings;
use crate::error::{MetabindError, Result};
use crate::fields::{ControlView, InputControl, InputField};
use crate::metadata::MetadataStore;
use crate::parser::{DeclarationParser, ParserSettings};
use crate::registry::Uid;
use crate::sync::BindingSynchronizer;

/// Inline stand-in for a declaration that failed to parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPlaceholder {
    pub message: String,
    /// The declaration text as written.
    pub source: String,
}

/// A mounted control and its registry uid.
#[derive(Debug)]
pub struct LiveField {
    uid: Uid,
    control: InputField,
    view: ControlView,
}

impl LiveField {
    pub fn uid(&self) -> Uid {
        self.uid
    }

    pub fn control(&self) -> &InputField {
        &self.control
    }

    pub fn view(&self) -> &ControlView {
        &self.view
    }

    pub fn value(&self) -> Result<Value> {
        self.control.value()
    }
}

#[derive(Debug)]
pub enum RenderedField {
    Live(LiveField),
    Error(ErrorPlaceholder),
}

impl RenderedField {
    pub fn as_live(&self) -> Option<&LiveField> {
        match self {
            RenderedField::Live(field) => Some(field),
            RenderedField::Error(_) => None,
        }
    }

    pub fn into_live(self) -> Option<LiveField> {
        match self {
            RenderedField::Live(field) => Some(field),
            RenderedField::Error(_) => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorPlaceholder> {
        match self {
            RenderedField::Error(placeholder) => Some(placeholder),
            RenderedField::Live(_) => None,
        }
    }
}

/// Parses, mounts and keeps live fields in step with the store.
#[derive(Debug, Default)]
pub struct Renderer {
    parser: DeclarationParser,
    synchronizer: BindingSynchronizer,
}

impl Renderer {
    pub fn new(parser: DeclarationParser, synchronizer: BindingSynchronizer) -> Self {
        Self {
            parser,
            synchronizer,
        }
    }

    /// Renderer for a set of documents, configured from `settings`.
    pub fn from_settings(settings: &Settings, index: FileIndex) -> Self {
        Self::new(
            DeclarationParser::from_settings(settings),
            BindingSynchronizer::new(index),
        )
    }

    pub fn parser(&self) -> &DeclarationParser {
        &self.parser
    }

    pub fn synchronizer(&self) -> &BindingSynchronizer {
        &self.synchronizer
    }

    pub fn synchronizer_mut(&mut self) -> &mut BindingSynchronizer {
        &mut self.synchronizer
    }

    /// Render one declaration found in `context_file`.
    pub fn render(
        &mut self,
        text: &str,
        context_file: &FileRef,
        store: &dyn MetadataStore,
    ) -> RenderedField {
        match self.mount(text, context_file, store) {
            Ok(field) => RenderedField::Live(field),
            Err(err @ MetabindError::Internal { .. }) => {
                // Already logged at error level when it was built.
                RenderedField::Error(placeholder(&err, text))
            }
            Err(err) => {
                tracing::warn!("{}: {}", context_file, err);
                RenderedField::Error(placeholder(&err, text))
            }
        }
    }

    fn mount(
        &mut self,
        text: &str,
        context_file: &FileRef,
        store: &dyn MetadataStore,
    ) -> Result<LiveField> {
        let declaration = self.parser.parse(text)?;
        let mut control = InputField::build(&declaration, &self.parser.settings().date_format)?;
        let uid = self
            .synchronizer
            .attach(declaration, context_file, &control, store);
        control.mount();

        let mut field = LiveField {
            uid,
            view: control.view(),
            control,
        };
        if let Err(err) = self.flush(&mut field) {
            self.synchronizer.detach(uid);
            return Err(err);
        }
        Ok(field)
    }

    /// Apply the value waiting for `field`, if any.
    pub fn flush(&mut self, field: &mut LiveField) -> Result<bool> {
        let Some(value) = self.synchronizer.take_pending(field.uid) else {
            return Ok(false);
        };
        field.control.set_value(&value)?;
        field.view = field.control.view();
        Ok(true)
    }

    /// Apply a user edit to `field` and write it through to the store.
    pub fn edit(
        &mut self,
        field: &mut LiveField,
        value: Value,
        store: &mut dyn MetadataStore,
    ) -> Result<()> {
        field.control.set_value(&value)?;
        field.view = field.control.view();
        let coerced = field.control.value()?;
        self.synchronizer.on_user_edit(field.uid, coerced, store)?;
        Ok(())
    }

    /// Hand every queued store change to the synchronizer.
    ///
    /// Returns the uids with a new pending value.
    pub fn deliver(&mut self, store: &mut dyn MetadataStore) -> Vec<Uid> {
        let mut updated = Vec::new();
        for change in store.drain_changes() {
            for uid in self
                .synchronizer
                .on_external_change(&change.file, &change.snapshot)
            {
                if !updated.contains(&uid) {
                    updated.push(uid);
                }
            }
        }
        updated
    }

    pub fn unmount(&mut self, field: LiveField) {
        self.synchronizer.detach(field.uid);
    }

    /// Reload templates and the date format. Returns the template errors.
    ///
    /// Fields already mounted keep the declaration they were parsed with.
    pub fn reconfigure(&mut self, settings: &Settings) -> Vec<MetabindError> {
        self.parser.set_settings(ParserSettings::from(settings));
        self.parser.parse_templates(&settings.input_templates)
    }
}

fn placeholder(err: &MetabindError, text: &str) -> ErrorPlaceholder {
    ErrorPlaceholder {
        message: err.to_string(),
        source: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::FieldPath;
    use crate::config::TemplateConfig;
    use crate::metadata::InMemoryStore;

    fn note() -> FileRef {
        FileRef::new("note.md")
    }

    fn setup(metadata: &str) -> (Renderer, InMemoryStore) {
        let mut store = InMemoryStore::new();
        store.insert(note(), serde_yaml::from_str(metadata).unwrap());
        let renderer = Renderer::from_settings(&Settings::default(), FileIndex::new([note()]));
        (renderer, store)
    }

    #[test]
    fn render_seeds_control_from_store() {
        let (mut renderer, store) = setup("done: true");
        let rendered = renderer.render("INPUT[toggle(title(Done)):done]", &note(), &store);
        let field = rendered.as_live().unwrap();
        assert_eq!(field.value().unwrap(), Value::Bool(true));
        assert_eq!(field.view().display, "true");
        assert_eq!(field.view().label.as_deref(), Some("Done"));
    }

    #[test]
    fn parse_errors_become_placeholders() {
        let (mut renderer, store) = setup("{}");
        let rendered = renderer.render("INPUT[bogus]", &note(), &store);
        let placeholder = rendered.as_error().unwrap();
        assert!(placeholder.message.contains("Unknown input field type 'bogus'"));
        assert_eq!(placeholder.source, "INPUT[bogus]");
        assert!(renderer.synchronizer().registry().is_empty());
    }

    #[test]
    fn edit_writes_through_and_echo_is_not_reapplied() {
        let (mut renderer, mut store) = setup("count: 1");
        let mut field = renderer
            .render("INPUT[slider:count]", &note(), &store)
            .into_live()
            .unwrap();

        renderer
            .edit(&mut field, Value::String("7".into()), &mut store)
            .unwrap();
        let path = FieldPath::parse("count").unwrap();
        assert_eq!(store.read(&note(), &path), Some(Value::from(7)));

        assert!(renderer.deliver(&mut store).is_empty());
        assert!(!renderer.flush(&mut field).unwrap());
    }

    #[test]
    fn external_change_reaches_field_on_flush() {
        let (mut renderer, mut store) = setup("title: a");
        let mut field = renderer
            .render("INPUT[text:title]", &note(), &store)
            .into_live()
            .unwrap();

        store.replace(&note(), serde_yaml::from_str("title: b").unwrap());
        assert_eq!(renderer.deliver(&mut store), vec![field.uid()]);
        assert!(renderer.flush(&mut field).unwrap());
        assert_eq!(field.view().display, "b");
    }

    #[test]
    fn unmount_detaches() {
        let (mut renderer, store) = setup("{}");
        let field = renderer
            .render("INPUT[toggle:done]", &note(), &store)
            .into_live()
            .unwrap();
        renderer.unmount(field);
        assert!(renderer.synchronizer().registry().is_empty());
    }

    #[test]
    fn reconfigure_installs_templates() {
        let (mut renderer, store) = setup("{}");
        let settings = Settings {
            input_templates: vec![
                TemplateConfig::new("rating", "INPUT[slider(minValue(1), maxValue(5))]"),
                TemplateConfig::new("broken", "INPUT[nope]"),
            ],
            ..Settings::default()
        };
        let errors = renderer.reconfigure(&settings);
        assert_eq!(errors.len(), 1);

        let rendered = renderer.render("INPUT[rating][:score]", &note(), &store);
        assert_eq!(
            rendered.as_live().unwrap().value().unwrap(),
            Value::from(1)
        );
    }
}
