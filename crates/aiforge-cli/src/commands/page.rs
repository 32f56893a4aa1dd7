use aiforge_core::site::Page;
use anyhow::Result;
use clap::Args;

use super::LangArg;

#[derive(Args)]
pub struct PageArgs {
    /// Page name; unknown names show the home page
    #[arg(default_value = "home")]
    pub name: String,

    /// Language of the copy
    #[arg(long, value_enum, default_value = "en")]
    pub lang: LangArg,
}

pub fn run(args: &PageArgs) -> Result<()> {
    let page = Page::resolve(&args.name);
    crate::summary::print_page(page, args.lang.into());
    Ok(())
}
