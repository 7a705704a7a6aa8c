use std::sync::{Arc, OnceLock};

use chrono::{DateTime, SecondsFormat, Utc};
use minijinja::{context, AutoEscape, Environment};
use serde::Serialize;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::CategoryFilter;
use crate::modules::catalog_store::CatalogStore;

const SITEMAP_TEMPLATE_NAME: &str = "sitemap.xml";
const SITEMAP_TEMPLATE: &str = include_str!("../../../../templates/sitemap.xml.jinja");

/// Pages served by the front end regardless of catalog content
const STATIC_PAGES: &[(&str, ChangeFrequency, f32)] = &[
    ("", ChangeFrequency::Weekly, 1.0),
    ("/about", ChangeFrequency::Monthly, 0.8),
    ("/contact", ChangeFrequency::Monthly, 0.8),
    ("/clients", ChangeFrequency::Monthly, 0.8),
];

const CATEGORY_PRIORITY: f32 = 0.7;

static SITEMAP_ENV: OnceLock<Environment<'static>> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: ChangeFrequency,
    pub priority: String,
}

impl SitemapEntry {
    fn new(
        loc: String,
        last_modified: DateTime<Utc>,
        changefreq: ChangeFrequency,
        priority: f32,
    ) -> Self {
        Self {
            loc,
            lastmod: last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
            changefreq,
            priority: format!("{:.1}", priority),
        }
    }
}

fn xml_escape(value: String) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();
    // Escaping is explicit through the `xml` filter
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_filter("xml", xml_escape);
    if let Err(e) = env.add_template(SITEMAP_TEMPLATE_NAME, SITEMAP_TEMPLATE) {
        tracing::error!("Failed to load sitemap template: {}", e);
    }
    env
}

fn get_environment() -> &'static Environment<'static> {
    SITEMAP_ENV.get_or_init(init_environment)
}

/// Builds the storefront sitemap from the static pages and every category
pub struct SitemapService {
    store: Arc<dyn CatalogStore>,
    base_url: String,
}

impl SitemapService {
    pub fn new(store: Arc<dyn CatalogStore>, base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Sitemap entries as of `now`. A failing category query is logged and
    /// leaves only the static pages.
    pub async fn entries(&self, now: DateTime<Utc>) -> Vec<SitemapEntry> {
        let mut entries: Vec<SitemapEntry> = STATIC_PAGES
            .iter()
            .map(|(path, changefreq, priority)| {
                SitemapEntry::new(
                    format!("{}{}", self.base_url, path),
                    now,
                    *changefreq,
                    *priority,
                )
            })
            .collect();

        match self.store.list_categories(CategoryFilter::All).await {
            Ok(categories) => {
                entries.extend(categories.into_iter().map(|category| {
                    SitemapEntry::new(
                        format!(
                            "{}/category/{}",
                            self.base_url,
                            urlencoding::encode(&category.slug)
                        ),
                        category.last_modified(),
                        ChangeFrequency::Monthly,
                        CATEGORY_PRIORITY,
                    )
                }));
            }
            Err(e) => {
                tracing::error!("Error fetching categories for sitemap: {}", e);
            }
        }

        entries
    }

    pub fn render(&self, entries: &[SitemapEntry]) -> Result<String> {
        let template = get_environment()
            .get_template(SITEMAP_TEMPLATE_NAME)
            .map_err(|e| AppError::Internal(format!("Sitemap template not found: {}", e)))?;

        template
            .render(context! { entries => entries })
            .map_err(|e| AppError::Internal(format!("Failed to render sitemap: {}", e)))
    }

    pub async fn build(&self, now: DateTime<Utc>) -> Result<String> {
        let entries = self.entries(now).await;
        self.render(&entries)
    }
}
