use crate::{
    cli::{Context, Fetched, finish},
    errors::MovieDbError,
    info,
    management::CacheKind,
    printer,
    progress::Spinner,
    tmdb,
    types::{PageEnvelope, Person},
};

/// Lists one page of popular people.
///
/// See the module docs for how `save` and `local` combine.
pub async fn list_people(
    ctx: &Context,
    page: u32,
    save: bool,
    local: bool,
) -> Result<(), MovieDbError> {
    if !local || save {
        fetch_people_page(ctx, page, save).await?;
    }

    if local {
        read_people_page(ctx, page).await?;
    }

    Ok(())
}

/// Fetches and prints a single person. There is no cached variant.
pub async fn fetch_person(ctx: &Context, id: u64) -> Result<(), MovieDbError> {
    let spinner = Spinner::start("Fetching the person data...");
    let result = tmdb::people::by_id(&ctx.client, id).await;
    let person = finish(spinner, result, "Person - loaded")?;

    printer::print_person(&person);
    Ok(())
}

async fn fetch_people_page(ctx: &Context, page: u32, save: bool) -> Result<(), MovieDbError> {
    let spinner = Spinner::start("Loading popular people");
    let result = async {
        let raw = tmdb::people::popular(&ctx.client, page).await?;
        if save {
            let path = ctx.cache.persist(CacheKind::PopularPeople, &raw).await?;
            Ok::<_, MovieDbError>(Fetched::Saved(path))
        } else {
            Ok(Fetched::Loaded(PageEnvelope::<Person>::from_value(raw)?))
        }
    }
    .await;

    match finish(spinner, result, "Popular people - loaded")? {
        Fetched::Saved(path) => info!("Popular people page {} saved to {}", page, path.display()),
        Fetched::Loaded(envelope) => printer::print_people(&envelope),
    }

    Ok(())
}

async fn read_people_page(ctx: &Context, page: u32) -> Result<(), MovieDbError> {
    let spinner = Spinner::start("Reading people JSON file");
    let result = ctx
        .cache
        .load::<Person>(CacheKind::PopularPeople, page)
        .await;
    let envelope = finish(spinner, result, "Popular people - loaded from cache")?;

    printer::print_people(&envelope);
    Ok(())
}
