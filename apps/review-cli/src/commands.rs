//! One function per subcommand, each driving the matching page controller

use anyhow::{bail, Context, Result};
use review_core::components::Navbar;
use review_core::{
    ApiClient, AuthContext, DashboardPage, ExportFile, ReviewLoad, ReviewPage, StatusFilter,
};
use review_types::BulkAction;
use tracing::info;

use crate::cli::{BulkArgs, DocumentsArgs, ExportArgs, ReviewArgs};
use crate::display;

pub async fn documents(api: &ApiClient, auth: &AuthContext, args: DocumentsArgs) -> Result<()> {
    let mut page = DashboardPage::new();
    page.load(api).await;
    page.set_search(args.search);
    page.set_status_filter(StatusFilter::from(args.status));

    println!("{}", display::navbar(&Navbar::new(DashboardPage::TITLE, auth)));
    println!();
    println!("{}", display::summary(&page.summary_cards()));
    println!();
    println!("{}", page.status_filter().label());
    println!("{}", display::document_list(&page.cards()));
    Ok(())
}

/// Loaded dashboard with `ids` selected
async fn dashboard(api: &ApiClient, ids: &[String]) -> DashboardPage {
    let mut page = DashboardPage::new();
    page.load(api).await;
    page.select(ids.iter().map(String::as_str));
    page
}

pub async fn bulk(api: &ApiClient, auth: &AuthContext, args: BulkArgs) -> Result<()> {
    let mut page = dashboard(api, &args.ids).await;

    let outcome = match args.action {
        BulkAction::Approve => page.bulk_approve(api, auth).await,
        BulkAction::Review => page.bulk_review(api, auth).await,
    };
    display::print_toasts(&page.take_toasts());

    match outcome {
        Some(_) => {
            println!("{}", display::document_list(&page.cards()));
            Ok(())
        }
        None => bail!("bulk {} failed", args.action.as_str()),
    }
}

pub async fn export(api: &ApiClient, args: ExportArgs) -> Result<()> {
    let mut page = dashboard(api, &args.ids).await;

    let file = page.export(api, args.format, args.include_attributes).await;
    display::print_toasts(&page.take_toasts());
    match file {
        Some(file) => write(&file, &args.out),
        None => bail!("export failed"),
    }
}

pub async fn review(api: &ApiClient, auth: &AuthContext, args: ReviewArgs) -> Result<()> {
    let mut page = match ReviewPage::load(api, &args.id).await {
        ReviewLoad::Loaded(page) => page,
        ReviewLoad::Redirect(_) => {
            bail!("Document {} not found", args.id)
        }
        ReviewLoad::Failed(toast) => {
            display::print_toasts(&[toast]);
            bail!("could not load {}", args.id)
        }
    };

    if let Some(id) = &args.select {
        if !page.select_attribute(id) {
            bail!("Document {} has no attribute {}", args.id, id);
        }
    }
    if args.accept_all {
        page.accept_all();
    }
    for (id, value) in &args.corrections {
        if !page.set_corrected_value(id, value.as_str()) {
            bail!("Document {} has no attribute {}", args.id, id);
        }
    }
    page.set_search(args.search);

    println!("{}", display::navbar(&Navbar::new(ReviewPage::TITLE, auth)));
    println!();
    let doc = page.document();
    println!("=== {} ===", doc.title);
    println!("{} · {}", doc.status, doc.uploaded_at);
    println!();
    println!(
        "{}",
        display::attribute_list(&page.attribute_cards(), page.low_confidence_count())
    );
    println!();
    println!("{}", display::viewer(&page.viewer_panel(), page.viewer()));
    println!();

    let mut failed = false;
    if args.save {
        failed |= !page.save(api, auth).await;
    }
    let file = match args.export {
        Some(format) => {
            let file = page.export(api, format).await;
            failed |= file.is_none();
            file
        }
        None => None,
    };
    display::print_toasts(&page.take_toasts());

    if let Some(file) = file {
        write(&file, &args.out)?;
    }
    if failed {
        bail!("review of {} did not complete", args.id);
    }
    Ok(())
}

fn write(file: &ExportFile, dir: &std::path::Path) -> Result<()> {
    let path = file
        .write_to(dir)
        .with_context(|| format!("writing {} into {}", file.filename, dir.display()))?;
    info!("Wrote {} ({} bytes)", path.display(), file.bytes.len());
    println!("{}", path.display());
    Ok(())
}
