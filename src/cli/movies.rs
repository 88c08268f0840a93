use crate::{
    cli::{Context, Fetched, finish},
    errors::MovieDbError,
    info,
    management::CacheKind,
    printer,
    progress::Spinner,
    tmdb,
    types::{Movie, MovieList, PageEnvelope},
};

/// Lists one page of popular or now-playing movies.
///
/// Uses the same network/cache decision tree as
/// [`list_people`](crate::cli::list_people).
pub async fn list_movies(
    ctx: &Context,
    kind: MovieList,
    page: u32,
    save: bool,
    local: bool,
) -> Result<(), MovieDbError> {
    if !local || save {
        fetch_movies_page(ctx, kind, page, save).await?;
    }

    if local {
        read_movies_page(ctx, kind, page).await?;
    }

    Ok(())
}

/// Fetches a single movie, or only its reviews when `reviews` is set.
pub async fn fetch_movie(ctx: &Context, id: u64, reviews: bool) -> Result<(), MovieDbError> {
    let spinner = Spinner::start("Fetching the movie data...");

    if reviews {
        let result = tmdb::movies::reviews(&ctx.client, id).await;
        let page = finish(spinner, result, "Movie reviews - loaded")?;
        printer::print_reviews(&page);
    } else {
        let result = tmdb::movies::by_id(&ctx.client, id).await;
        let movie = finish(spinner, result, "Movie - loaded")?;
        printer::print_movie(&movie);
    }

    Ok(())
}

async fn fetch_movies_page(
    ctx: &Context,
    kind: MovieList,
    page: u32,
    save: bool,
) -> Result<(), MovieDbError> {
    let spinner = Spinner::start(format!("Loading {}", kind.title().to_lowercase()));
    let result = async {
        let raw = tmdb::movies::list(&ctx.client, kind, page).await?;
        if save {
            let path = ctx.cache.persist(CacheKind::from(kind), &raw).await?;
            Ok::<_, MovieDbError>(Fetched::Saved(path))
        } else {
            Ok(Fetched::Loaded(PageEnvelope::<Movie>::from_value(raw)?))
        }
    }
    .await;

    match finish(spinner, result, format!("{} - loaded", kind.title()))? {
        Fetched::Saved(path) => info!(
            "{} page {} saved to {}",
            kind.title(),
            page,
            path.display()
        ),
        Fetched::Loaded(envelope) => printer::print_movies(&envelope, kind),
    }

    Ok(())
}

async fn read_movies_page(ctx: &Context, kind: MovieList, page: u32) -> Result<(), MovieDbError> {
    let spinner = Spinner::start("Reading movies JSON file");
    let result = ctx
        .cache
        .load::<Movie>(CacheKind::from(kind), page)
        .await;
    let envelope = finish(
        spinner,
        result,
        format!("{} - loaded from cache", kind.title()),
    )?;

    printer::print_movies(&envelope, kind);
    Ok(())
}
