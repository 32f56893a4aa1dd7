use aiforge_core::catalog::{self, Gender};
use anyhow::Result;
use clap::Args;

use super::{CategoryArg, GenderArg};

#[derive(Args)]
pub struct CatalogArgs {
    /// Only show garments for this model gender
    #[arg(long, value_enum)]
    pub gender: Option<GenderArg>,

    /// Only show garments in this category
    #[arg(long, value_enum)]
    pub category: Option<CategoryArg>,
}

pub fn run(args: &CatalogArgs) -> Result<()> {
    let genders: Vec<Gender> = match args.gender {
        Some(g) => vec![g.into()],
        None => Gender::ALL.to_vec(),
    };
    let category = args.category.map(Into::into);

    let garments: Vec<_> = genders
        .into_iter()
        .flat_map(|g| catalog::filter(g, category))
        .collect();

    crate::summary::print_catalog(&garments);
    Ok(())
}
