//! Initial yips loaded the first time a store is created.
//!
//! The seed file holds one yip per line as six comma-separated fields:
//! `id,name,yip,hashtag,likes,date`. Blank lines are ignored.

use std::path::Path;

use sea_orm::{EntityTrait, Set};

use super::entity::yip;
use super::error::StoreError;

const SEED_FIELDS: usize = 6;

/// One pre-numbered yip from the seed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRow {
    pub id: i64,
    pub name: String,
    pub yip: String,
    pub hashtag: String,
    pub likes: i64,
    pub date: String,
}

impl From<SeedRow> for yip::ActiveModel {
    fn from(row: SeedRow) -> Self {
        Self {
            id: Set(row.id),
            name: Set(row.name),
            yip: Set(row.yip),
            hashtag: Set(row.hashtag),
            likes: Set(row.likes),
            date: Set(row.date),
        }
    }
}

/// Read and parse a seed file.
pub fn read_seed_file(path: &Path) -> Result<Vec<SeedRow>, StoreError> {
    let text = std::fs::read_to_string(path).map_err(|source| StoreError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&text)
}

/// Parse seed text, rejecting any line that is not exactly six fields.
pub fn parse_seed(text: &str) -> Result<Vec<SeedRow>, StoreError> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| parse_line(line_no, line))
        .collect()
}

fn parse_line(line_no: usize, line: &str) -> Result<SeedRow, StoreError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != SEED_FIELDS {
        return Err(StoreError::Seed {
            line: line_no,
            reason: format!("expected {SEED_FIELDS} fields, found {}", fields.len()),
        });
    }

    let id = fields[0].parse::<i64>().map_err(|_| StoreError::Seed {
        line: line_no,
        reason: format!("id {:?} is not an integer", fields[0]),
    })?;
    let likes = fields[4]
        .parse::<i64>()
        .ok()
        .filter(|likes| *likes >= 0)
        .ok_or_else(|| StoreError::Seed {
            line: line_no,
            reason: format!("likes {:?} is not a non-negative integer", fields[4]),
        })?;

    Ok(SeedRow {
        id,
        name: fields[1].to_string(),
        yip: fields[2].to_string(),
        hashtag: fields[3].to_string(),
        likes,
        date: fields[5].to_string(),
    })
}

/// Rows per INSERT; keeps bound parameters well under SQLite's limit.
const SEED_CHUNK: usize = 500;

/// Insert seed rows in chunks on the given connection or transaction.
pub(crate) async fn insert_rows<C>(conn: &C, rows: Vec<SeedRow>) -> Result<u64, sea_orm::DbErr>
where
    C: sea_orm::ConnectionTrait,
{
    let mut inserted = 0;
    let mut rows = rows.into_iter().peekable();
    while rows.peek().is_some() {
        let chunk: Vec<yip::ActiveModel> = rows.by_ref().take(SEED_CHUNK).map(Into::into).collect();
        let count = chunk.len() as u64;
        yip::Entity::insert_many(chunk).exec(conn).await?;
        inserted += count;
    }
    Ok(inserted)
}
