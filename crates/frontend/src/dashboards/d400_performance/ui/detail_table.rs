use crate::shared::i18n::PerformanceTexts;
use crate::shared::number_format::format_brl;
use contracts::dashboards::d400_performance::dto::InvoiceLine;
use contracts::domain::a003_invoice::aggregate::InvoiceStatus;
use leptos::prelude::*;

/// Invoice lines of one client with their subtotal
#[derive(Debug, Clone, PartialEq)]
pub struct ClientBlock {
    pub client_name: String,
    pub lines: Vec<InvoiceLine>,
    pub gross: f64,
    pub net: f64,
    pub commission: f64,
}

/// Consecutive lines of the same client form one block; details arrive
/// already ordered by client name.
pub fn group_by_client(lines: &[InvoiceLine]) -> Vec<ClientBlock> {
    let mut blocks: Vec<ClientBlock> = Vec::new();
    for line in lines {
        let same_client = blocks
            .last()
            .map(|b| b.client_name == line.client_name)
            .unwrap_or(false);
        if !same_client {
            blocks.push(ClientBlock {
                client_name: line.client_name.clone(),
                lines: Vec::new(),
                gross: 0.0,
                net: 0.0,
                commission: 0.0,
            });
        }
        if let Some(block) = blocks.last_mut() {
            block.gross += line.gross;
            block.net += line.net;
            block.commission += line.commission;
            block.lines.push(line.clone());
        }
    }
    blocks
}

fn status_label(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Issued => "●",
        InvoiceStatus::Paid => "✔",
    }
}

#[component]
pub fn DetailTable(lines: Vec<InvoiceLine>, t: &'static PerformanceTexts) -> impl IntoView {
    let blocks = group_by_client(&lines);
    let total_gross: f64 = blocks.iter().map(|b| b.gross).sum();
    let total_net: f64 = blocks.iter().map(|b| b.net).sum();
    let total_commission: f64 = blocks.iter().map(|b| b.commission).sum();

    let body = blocks
        .into_iter()
        .map(|block| {
            let rows = block
                .lines
                .into_iter()
                .map(|line| {
                    view! {
                        <tr>
                            <td>{line.system_name}</td>
                            <td>{line.service_order}</td>
                            <td>{line.invoice_number}</td>
                            <td>{line.issue_date.format("%d/%m/%Y").to_string()}</td>
                            <td class="num">{format_brl(line.gross)}</td>
                            <td class="num">{format_brl(line.net)}</td>
                            <td class="num">{format_brl(line.commission)}</td>
                            <td class="status" title=line.status.as_str()>{status_label(line.status)}</td>
                        </tr>
                    }
                })
                .collect_view();
            view! {
                <tr class="table__group-header">
                    <td colspan="8">{block.client_name}</td>
                </tr>
                {rows}
                <tr class="table__subtotal">
                    <td colspan="4">{t.subtotal}</td>
                    <td class="num">{format_brl(block.gross)}</td>
                    <td class="num">{format_brl(block.net)}</td>
                    <td class="num">{format_brl(block.commission)}</td>
                    <td></td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="table table--report">
            <thead>
                <tr>
                    <th>{t.system}</th>
                    <th>{t.service_order}</th>
                    <th>{t.invoice_number}</th>
                    <th>{t.issue_date}</th>
                    <th class="num">{t.gross}</th>
                    <th class="num">{t.net_revenue}</th>
                    <th class="num">{t.commission}</th>
                    <th>{t.status}</th>
                </tr>
            </thead>
            <tbody>{body}</tbody>
            <tfoot>
                <tr class="table__total">
                    <td colspan="4">{t.total}</td>
                    <td class="num">{format_brl(total_gross)}</td>
                    <td class="num">{format_brl(total_net)}</td>
                    <td class="num">{format_brl(total_commission)}</td>
                    <td></td>
                </tr>
            </tfoot>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn line(client: &str, number: &str, gross: f64, net: f64) -> InvoiceLine {
        InvoiceLine {
            invoice_ref: number.to_string(),
            consultant_ref: "c1".into(),
            consultant_name: "Ana".into(),
            client_ref: client.to_lowercase(),
            client_name: client.to_string(),
            system_name: "ERP".into(),
            service_order: "OS-1".into(),
            invoice_number: number.to_string(),
            issue_date: NaiveDate::from_ymd_opt(2007, 1, 10).unwrap(),
            gross,
            net,
            commission: net * 0.05,
            status: InvoiceStatus::Paid,
        }
    }

    #[test]
    fn test_blocks_follow_client_runs() {
        let lines = vec![
            line("Acme", "1", 100.0, 90.0),
            line("Acme", "2", 50.0, 45.0),
            line("Globex", "3", 10.0, 9.0),
        ];
        let blocks = group_by_client(&lines);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines.len(), 2);
        assert_eq!(blocks[0].gross, 150.0);
        assert_eq!(blocks[0].net, 135.0);
        assert_eq!(blocks[1].client_name, "Globex");
    }

    #[test]
    fn test_no_lines_no_blocks() {
        assert!(group_by_client(&[]).is_empty());
    }
}
