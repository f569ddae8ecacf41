use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use watch_catalog::{
    config::AppConfig,
    db::{OrmConn, create_orm_conn, run_migrations},
    entity::{baskets, manufacturers, users, watches},
    services::auth_service,
};

const CATALOG: &[(&str, &[(&str, &str, &str)])] = &[
    (
        "Apple",
        &[
            ("Apple Watch Series 9", "Aluminium case, always-on display", "399.00"),
            ("Apple Watch Ultra 2", "Titanium case for endurance sports", "799.00"),
        ],
    ),
    (
        "Casio",
        &[
            ("Casio G-Shock GA-2100", "Carbon core guard, 200m water resistance", "99.00"),
            ("Casio F-91W", "Resin digital classic", "19.99"),
        ],
    ),
    (
        "Seiko",
        &[
            ("Seiko 5 Sports SRPD55", "Automatic movement, day-date", "295.00"),
            ("Seiko Prospex SPB143", "Diver's 200m, sapphire crystal", "1200.00"),
        ],
    ),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    let admin = ensure_user(&orm, "admin", "admin123", true).await?;
    let customer = ensure_user(&orm, "customer", "customer123", false).await?;
    let basket_id = ensure_basket(&orm, customer.id).await?;
    seed_catalog(&orm).await?;

    tracing::info!(
        admin_id = admin.id,
        customer_id = customer.id,
        basket_id,
        "seed completed"
    );
    Ok(())
}

async fn ensure_user(
    orm: &OrmConn,
    username: &str,
    password: &str,
    is_staff: bool,
) -> anyhow::Result<users::Model> {
    let existing = users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(orm)
        .await?;
    if let Some(user) = existing {
        tracing::info!(username, "user already present");
        return Ok(user);
    }
    let user = auth_service::register_user(orm, username, password, is_staff)
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(user)
}

async fn ensure_basket(orm: &OrmConn, user_id: i32) -> anyhow::Result<i32> {
    let existing = baskets::Entity::find()
        .filter(baskets::Column::UserId.eq(user_id))
        .one(orm)
        .await?;
    if let Some(basket) = existing {
        return Ok(basket.id);
    }
    let basket = baskets::ActiveModel {
        user_id: Set(user_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    Ok(basket.id)
}

async fn seed_catalog(orm: &OrmConn) -> anyhow::Result<()> {
    for (manufacturer, models) in CATALOG {
        let manufacturer_id = match manufacturers::Entity::find()
            .filter(manufacturers::Column::Name.eq(*manufacturer))
            .one(orm)
            .await?
        {
            Some(existing) => existing.id,
            None => {
                let now = Utc::now();
                manufacturers::ActiveModel {
                    name: Set(manufacturer.to_string()),
                    time_created: Set(now.into()),
                    time_updated: Set(now.into()),
                    ..Default::default()
                }
                .insert(orm)
                .await?
                .id
            }
        };

        for (name, description, price) in *models {
            let exists = watches::Entity::find()
                .filter(watches::Column::Name.eq(*name))
                .one(orm)
                .await?
                .is_some();
            if exists {
                continue;
            }
            let now = Utc::now();
            watches::ActiveModel {
                name: Set(name.to_string()),
                description: Set(description.to_string()),
                manufacturer_id: Set(manufacturer_id),
                price: Set(price.parse::<Decimal>()?),
                time_created: Set(now.into()),
                time_updated: Set(now.into()),
                is_active: Set(true),
                ..Default::default()
            }
            .insert(orm)
            .await?;
        }
        tracing::info!(manufacturer, "catalog seeded");
    }
    Ok(())
}
