use chrono::NaiveDate;
use contracts::domain::a003_invoice::aggregate::{Invoice, InvoiceStatus};
use sea_orm::DatabaseConnection;

use crate::domain::a001_consultant;
use crate::domain::a002_client;
use crate::domain::a003_invoice;
use crate::domain::a004_task::repository as task_repository;

/// (login, name, monthly fixed cost)
const CONSULTANTS: &[(&str, &str, f64)] = &[
    ("anapaula.chiodaro", "Ana Paula Fontes Chiodaro", 2800.0),
    ("carlos.arruda", "Carlos Flavio Girao de Arruda", 3500.0),
    ("carlos.carvalho", "Carlos Henrique de Carvalho", 1750.0),
    ("renato.pereira", "Renato Marcus Pereira", 4250.0),
    ("felipe.chahad", "Felipe Chahad", 2100.0),
];

/// (code, trade name, legal name)
const CLIENTS: &[(&str, &str, &str)] = &[
    ("agence", "Agence", "Agence Consultoria Ltda"),
    ("bnb", "Banco do Nordeste", "Banco do Nordeste do Brasil S.A."),
    ("fortes", "Fortes Tecnologia", "Fortes Tecnologia em Sistemas Ltda"),
    ("marquise", "Grupo Marquise", "Marquise Servicos Ambientais S.A."),
];

const SYSTEMS: &[&str] = &["Portal Web", "Intranet", "Sistema Financeiro", "E-commerce"];

/// (title, done, keyword ids); keyword ids index into TASK_KEYWORDS (1-based)
const TASKS: &[(&str, bool, &[i32])] = &[
    ("Set up project structure", true, &[1, 3]),
    ("Design the UI layout", true, &[2]),
    ("Implement task creation feature", false, &[1, 5]),
    ("Develop status toggle functionality", false, &[1, 5]),
    ("Integrate AI keyword suggestions", false, &[4]),
];

const TASK_KEYWORDS: &[&str] = &["development", "design", "planning", "AI", "frontend"];

/// Insert the demo data set into an empty database
pub async fn seed_demo_data(db: &DatabaseConnection) -> anyhow::Result<()> {
    if a001_consultant::repository::count(db).await? > 0 {
        tracing::info!("Database already has data, skipping demo seed");
        return Ok(());
    }

    let mut consultant_ids = Vec::new();
    for (login, name, fixed_cost) in CONSULTANTS {
        let id = a001_consultant::service::create(db, login, name, *fixed_cost).await?;
        consultant_ids.push(id.to_string());
    }

    let mut client_ids = Vec::new();
    for (code, name, legal_name) in CLIENTS {
        let id = a002_client::service::create(db, code, name, legal_name).await?;
        client_ids.push(id.to_string());
    }

    let mut invoice_count = 0usize;
    let mut number = 1000u32;
    for month in 1..=6u32 {
        for (ci, consultant_ref) in consultant_ids.iter().enumerate() {
            // Every consultant skips one month, so fixed cost totals differ
            if (ci as u32 + 2) % 6 == month % 6 {
                continue;
            }
            let per_month = 1 + (ci + month as usize) % 3;
            for k in 0..per_month {
                number += 1;
                let seed = (ci * 31 + k * 17 + month as usize * 7) as f64;
                let day = 1 + ((ci * 5 + k * 9 + month as usize) % 28) as u32;
                let Some(issue_date) = NaiveDate::from_ymd_opt(2007, month, day) else {
                    continue;
                };
                let client_ref = &client_ids[(ci + k + month as usize) % client_ids.len()];
                let invoice = Invoice::new_for_insert(
                    format!("{}", number),
                    SYSTEMS[(ci + k) % SYSTEMS.len()].to_string(),
                    consultant_ref.clone(),
                    client_ref.clone(),
                    format!("{}", 8000 + ci * 100 + k),
                    issue_date,
                    1500.0 + (seed * 137.0) % 6000.0,
                    [5.0, 8.65, 10.0, 14.25][(ci + k) % 4],
                    [4.0, 5.0, 6.0, 8.0][(ci + month as usize) % 4],
                    if month <= 3 {
                        InvoiceStatus::Paid
                    } else {
                        InvoiceStatus::Issued
                    },
                );
                a003_invoice::service::create(db, invoice).await?;
                invoice_count += 1;
            }
        }
    }

    for name in TASK_KEYWORDS {
        task_repository::insert_keyword(db, name).await?;
    }
    for (title, done, keyword_ids) in TASKS {
        task_repository::insert_task(db, title, *done, keyword_ids).await?;
    }

    tracing::info!(
        "Seeded demo data: {} consultants, {} clients, {} invoices, {} tasks",
        CONSULTANTS.len(),
        CLIENTS.len(),
        invoice_count,
        TASKS.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let db = test_connection().await;
        seed_demo_data(&db).await.unwrap();
        seed_demo_data(&db).await.unwrap();

        assert_eq!(
            a001_consultant::repository::count(&db).await.unwrap(),
            CONSULTANTS.len() as u64
        );
        let tasks = task_repository::list_tasks(&db).await.unwrap();
        assert_eq!(tasks.len(), 5);
        assert!(tasks[0].is_done);
        let names: Vec<&str> = tasks[0].keywords.iter().map(|k| k.name.as_str()).collect();
        assert_eq!(names, vec!["development", "planning"]);
        assert_eq!(tasks[4].keywords[0].name, "AI");
    }

    #[tokio::test]
    async fn test_seed_covers_january_2007() {
        let db = test_connection().await;
        seed_demo_data(&db).await.unwrap();

        let january = a003_invoice::service::list_by_period(
            &db,
            NaiveDate::from_ymd_opt(2007, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2007, 1, 31).unwrap(),
        )
        .await
        .unwrap();
        assert!(!january.is_empty());
    }
}
