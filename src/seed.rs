use sea_orm::*;

use crate::models::song;

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Leave an already-populated catalogue untouched
    let existing = song::Entity::find().count(db).await?;
    if existing > 0 {
        return Ok(());
    }

    let songs = [
        (
            "Bohemian Rhapsody",
            "https://songs.example.com/bohemian-rhapsody",
            245,
        ),
        (
            "Stairway to Heaven",
            "https://songs.example.com/stairway-to-heaven",
            189,
        ),
        (
            "Hotel California",
            "https://songs.example.com/hotel-california",
            131,
        ),
        ("Clair de Lune", "https://songs.example.com/clair-de-lune", 58),
        ("Take Five", "https://songs.example.com/take-five", 0),
    ];

    for (name, url, plays) in songs {
        let song = song::ActiveModel {
            name: Set(name.to_owned()),
            url: Set(url.to_owned()),
            plays: Set(plays),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };
        song.insert(db).await?;
    }

    Ok(())
}
