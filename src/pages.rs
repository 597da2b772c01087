//! Static pages: header, home, and about.

use crate::i18n::{
    AboutStrings, ContentResolver, HeaderStrings, HomeStrings, Language, LanguageStore,
    PageBundle, CONTACT_URL, GITHUB_URL, WEBSITE_URL,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageChoice {
    pub code: Language,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub title: &'static str,
    pub languages: Vec<LanguageChoice>,
}

/// A page rendered straight from its resource table.
#[derive(Debug, Clone, Serialize)]
pub struct StaticPage<B: 'static> {
    pub language: Language,
    pub fell_back: bool,
    #[serde(flatten)]
    pub content: &'static B,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutView {
    #[serde(flatten)]
    pub page: StaticPage<AboutStrings>,
    pub links: Vec<Link>,
}

/// Product title plus the language selector, marking the active language.
pub fn header(store: &LanguageStore) -> HeaderView {
    let current = store.current();
    let strings = ContentResolver::resolve::<HeaderStrings>(current);
    HeaderView {
        title: strings.title,
        languages: Language::all()
            .into_iter()
            .map(|language| LanguageChoice {
                code: language,
                label: language.native_name(),
                selected: language == current,
            })
            .collect(),
    }
}

fn static_page<B: PageBundle>(store: &LanguageStore) -> StaticPage<B> {
    let localized = ContentResolver::resolve::<B>(store.current());
    StaticPage {
        language: localized.served,
        fell_back: localized.fell_back(),
        content: localized.bundle,
    }
}

pub fn home(store: &LanguageStore) -> StaticPage<HomeStrings> {
    static_page(store)
}

pub fn about(store: &LanguageStore) -> AboutView {
    let page = static_page::<AboutStrings>(store);
    let links = vec![
        Link {
            label: page.content.github_label,
            url: GITHUB_URL,
        },
        Link {
            label: page.content.website_label,
            url: WEBSITE_URL,
        },
        Link {
            label: page.content.contact_label,
            url: CONTACT_URL,
        },
    ];
    AboutView { page, links }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;

    #[test]
    fn test_header_in_every_language() {
        let store = LanguageStore::default();
        for language in Language::all() {
            store.set_language(language.code()).unwrap();
            let view = header(&store);
            assert!(!view.title.is_empty());
            assert_eq!(view.languages.len(), 7);
            assert_eq!(view.languages.iter().filter(|l| l.selected).count(), 1);
        }
    }

    #[test]
    fn test_header_native_labels() {
        let store = LanguageStore::default();
        store.set_language("ko").unwrap();
        let view = header(&store);

        assert_eq!(view.title, "AI 안경");
        let labels: Vec<&str> = view.languages.iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec!["English", "中文", "Español", "Français", "Deutsch", "日本語", "한국어"]
        );
    }

    #[test]
    fn test_home_cards_link_feature_routes() {
        let page = home(&LanguageStore::default());
        let routes: Vec<Route> = page.content.applications.iter().map(|a| a.route).collect();

        assert!(routes.contains(&Route::Translate));
        assert!(routes.contains(&Route::Health));
        assert!(routes.contains(&Route::Navigation));
        assert_eq!(page.content.steps.len(), 3);
    }

    #[test]
    fn test_about_falls_back_for_german() {
        let store = LanguageStore::default();
        store.set_language("de").unwrap();
        let view = about(&store);

        assert!(view.page.fell_back);
        assert_eq!(view.page.language, Language::ENGLISH);
        assert_eq!(view.links.len(), 3);
        assert_eq!(view.links[0].url, GITHUB_URL);
    }

    #[test]
    fn test_about_serializes_flat() {
        let value = serde_json::to_value(about(&LanguageStore::default())).unwrap();
        assert_eq!(value["language"], "en");
        assert!(value["title"].is_string());
        assert_eq!(value["links"].as_array().map(Vec::len), Some(3));
    }
}
