//! Localization of the diagnostics morelia reports.
//!
//! Gherkin keywords are localized by the static keyword table; this module
//! covers the messages of syntax errors, missing steps and step failures.
//! Messages come from the Fluent bundles embedded under `i18n/`. A
//! process-wide loader starts out in US English; a [`ScopedLocalization`]
//! guard overrides it for the current thread.

use std::cell::RefCell;
use std::sync::{LazyLock, PoisonError, RwLock};

use fluent::FluentArgs;
use i18n_embed::I18nEmbedError;
use i18n_embed::fluent::{FluentLanguageLoader, fluent_language_loader};
use rust_embed::RustEmbed;
use thiserror::Error;
use unic_langid::{LanguageIdentifier, langid};

/// Embedded Fluent resources shipped with the crate.
///
/// # Examples
/// ```
/// # use morelia::localization::Localizations;
/// # use i18n_embed::fluent::fluent_language_loader;
/// # use unic_langid::langid;
/// let loader = fluent_language_loader!();
/// let selected = i18n_embed::select(&loader, &Localizations, &[langid!("fr")]).unwrap();
/// assert!(selected.contains(&langid!("fr")));
/// ```
#[derive(RustEmbed)]
#[folder = "i18n"]
pub struct Localizations;

static PROCESS_LOADER: LazyLock<RwLock<FluentLanguageLoader>> = LazyLock::new(|| {
    let loader = embedded_loader(&[langid!("en-US")]).unwrap_or_else(|error| {
        log::warn!("English diagnostics unavailable, falling back to message ids: {error}");
        fluent_language_loader!()
    });
    RwLock::new(loader)
});

thread_local! {
    static THREAD_LOADER: RefCell<Option<FluentLanguageLoader>> = const { RefCell::new(None) };
}

/// Errors from localization setup and queries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LocalizationError {
    /// The process-wide loader lock was poisoned.
    #[error("localization state is poisoned")]
    Poisoned,
    /// Loading or selecting Fluent resources failed.
    #[error("failed to load localization resources: {0}")]
    Loader(#[from] I18nEmbedError),
}

fn embedded_loader(languages: &[LanguageIdentifier]) -> Result<FluentLanguageLoader, I18nEmbedError> {
    let loader = fluent_language_loader!();
    i18n_embed::select(&loader, &Localizations, languages)?;
    Ok(loader)
}

/// Guard making a dedicated loader the active one for the current thread.
///
/// Dropping the guard restores whatever the thread used before, so guards
/// nest.
///
/// ```
/// use morelia::localization::{ScopedLocalization, message};
/// use unic_langid::langid;
///
/// {
///     let _french = ScopedLocalization::new(&[langid!("fr")])?;
///     assert_eq!(message("syntax-unterminated-docstring"), "bloc de texte non terminé");
/// }
/// assert_eq!(message("syntax-unterminated-docstring"), "unterminated docstring");
/// # Ok::<(), morelia::LocalizationError>(())
/// ```
#[must_use]
pub struct ScopedLocalization {
    previous: Option<FluentLanguageLoader>,
}

impl ScopedLocalization {
    /// Activate the best match for `requested` on the current thread.
    ///
    /// # Errors
    ///
    /// Returns [`LocalizationError::Loader`] if the embedded resources cannot
    /// be loaded.
    pub fn new(requested: &[LanguageIdentifier]) -> Result<Self, LocalizationError> {
        let loader = embedded_loader(requested)?;
        let previous = THREAD_LOADER.with(|slot| slot.replace(Some(loader)));
        Ok(Self { previous })
    }
}

impl Drop for ScopedLocalization {
    fn drop(&mut self) {
        let previous = self.previous.take();
        THREAD_LOADER.with(|slot| slot.replace(previous));
    }
}

/// Make `loader` the process-wide loader.
///
/// Threads holding a [`ScopedLocalization`] keep their own loader.
///
/// # Errors
///
/// Returns [`LocalizationError::Poisoned`] when the loader lock is poisoned.
pub fn install_localization_loader(loader: FluentLanguageLoader) -> Result<(), LocalizationError> {
    let mut slot = PROCESS_LOADER
        .write()
        .map_err(|_| LocalizationError::Poisoned)?;
    *slot = loader;
    Ok(())
}

/// Switch the active loader to the best match for `requested` and return
/// the languages now in use.
///
/// # Errors
///
/// Returns [`LocalizationError::Loader`] when resource selection fails.
pub fn select_localizations(
    requested: &[LanguageIdentifier],
) -> Result<Vec<LanguageIdentifier>, LocalizationError> {
    with_loader(|loader| i18n_embed::select(loader, &Localizations, requested))
        .map_err(LocalizationError::from)
}

/// Languages of the active loader, most preferred first.
///
/// # Errors
///
/// Currently always succeeds.
pub fn current_languages() -> Result<Vec<LanguageIdentifier>, LocalizationError> {
    Ok(with_loader(FluentLanguageLoader::current_languages))
}

/// Retrieve a localized string without interpolation arguments.
///
/// # Examples
/// ```
/// # use morelia::localization;
/// assert_eq!(
///     localization::message("syntax-linefeed-in-comment"),
///     "linefeed in comment"
/// );
/// ```
#[must_use]
pub fn message(id: &str) -> String {
    with_loader(|loader| loader.get(id))
}

/// Retrieve a localized string with Fluent arguments supplied via a closure.
///
/// Interpolated values come back without Unicode directional isolates, so the
/// result can be compared or embedded directly.
///
/// # Examples
/// ```
/// # use morelia::localization;
/// let rendered = localization::message_with_args("syntax-unknown-language", |args| {
///     args.set("language", "xx".to_string());
/// });
/// assert_eq!(rendered, r#"unknown language "xx""#);
/// ```
#[must_use]
pub fn message_with_args<F>(id: &str, configure: F) -> String
where
    F: FnOnce(&mut FluentArgs<'static>),
{
    with_loader(|loader| message_with_loader(loader, id, configure))
}

pub(crate) fn message_with_loader<F>(
    loader: &FluentLanguageLoader,
    id: &str,
    configure: F,
) -> String
where
    F: FnOnce(&mut FluentArgs<'static>),
{
    let mut args: FluentArgs<'static> = FluentArgs::new();
    configure(&mut args);
    strip_directional_isolates(&loader.get_args_fluent(id, Some(&args)))
}

/// Run `callback` with the thread's loader, or the process-wide one.
pub(crate) fn with_loader<R>(callback: impl FnOnce(&FluentLanguageLoader) -> R) -> R {
    THREAD_LOADER.with(|slot| match slot.borrow().as_ref() {
        Some(loader) => callback(loader),
        None => callback(
            &PROCESS_LOADER
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        ),
    })
}

/// Remove Unicode directional isolates inserted by Fluent during interpolation.
///
/// # Examples
/// ```
/// # use morelia::localization::strip_directional_isolates;
/// assert_eq!(strip_directional_isolates("\u{2068}xx\u{2069}"), "xx");
/// ```
#[must_use]
pub fn strip_directional_isolates(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(*c, '\u{2066}'..='\u{2069}'))
        .collect()
}
