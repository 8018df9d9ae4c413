//! Paginated document generation.
//! Combines the engine, a template and a base context into the pages to write.

use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::{
    context::Context,
    engine::TemplateRenderer,
    error::{Error, Result},
    pagination::{build_navigation, page_file_name, paginate},
    value::Value,
};

/// How a collection is spread over pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    /// Context name of the collection to paginate. `None` renders a single page.
    pub collection: Option<String>,
    /// Items per page; 0 puts every item on one page.
    pub page_size: usize,
    /// File name stem, e.g. `album` for `album.html`, `album_page2.html`.
    pub base_name: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self { collection: None, page_size: 0, base_name: "index".to_string() }
    }
}

/// A rendered page and the file name it should be written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub file_name: String,
    pub content: String,
}

impl RenderedPage {
    pub fn target(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.file_name)
    }
}

/// Main processor for paginated rendering.
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    template: &'a str,
    context: &'a Context,
    settings: &'a PageSettings,
}

impl<'a> Processor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        template: &'a str,
        context: &'a Context,
        settings: &'a PageSettings,
    ) -> Self {
        Self { engine, template, context, settings }
    }

    /// Renders every page.
    ///
    /// # Errors
    /// * `Error::ContextError` if the configured collection is missing or not a list
    /// * Any error of the underlying renderer
    pub fn process(&self) -> Result<Vec<RenderedPage>> {
        let Some(collection) = &self.settings.collection else {
            debug!("Rendering a single page '{}'", self.settings.base_name);
            let content = self.engine.render(self.template, self.context)?;
            return Ok(vec![RenderedPage {
                file_name: page_file_name(&self.settings.base_name, 1),
                content,
            }]);
        };

        let items = self.context.get(collection).and_then(Value::as_list).ok_or_else(|| {
            Error::ContextError(format!("collection '{}' is missing or not a list", collection))
        })?;

        let mut pages = paginate(items, self.settings.page_size);
        if pages.is_empty() {
            warn!("Collection '{}' is empty, rendering a single empty page", collection);
            pages.push(Vec::new());
        }

        let total_pages = pages.len();
        pages
            .into_iter()
            .enumerate()
            .map(|(index, page_items)| -> Result<RenderedPage> {
                let page = index + 1;
                debug!("Rendering page {}/{} with {} items", page, total_pages, page_items.len());

                let mut context = self.context.clone();
                context.set(collection.as_str(), Value::List(page_items));
                let navigation = build_navigation(page, total_pages, &self.settings.base_name);
                navigation.apply_to(&mut context)?;

                Ok(RenderedPage {
                    file_name: page_file_name(&self.settings.base_name, page),
                    content: self.engine.render(self.template, &context)?,
                })
            })
            .collect()
    }
}

/// Ensures the output directory is safe to write to.
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if the directory exists and `force` is false
pub fn get_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

/// Writes a page below `output_dir`, creating missing directories.
pub fn write_page<P: AsRef<Path>>(page: &RenderedPage, output_dir: P) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir).map_err(Error::IoError)?;
    let target = page.target(output_dir);
    std::fs::write(&target, &page.content).map_err(Error::IoError)?;
    Ok(target)
}
