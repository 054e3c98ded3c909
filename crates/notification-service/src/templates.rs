use scoring_core::RiskStatus;

use crate::AlertDigest;

pub struct EmailTemplate;

impl EmailTemplate {
    pub fn render(digest: &AlertDigest) -> String {
        let rows: String = digest
            .alerts
            .iter()
            .map(|alert| {
                // Terminal statuses get the red treatment.
                let row_bg = match alert.to_status {
                    RiskStatus::Distress | RiskStatus::Weak => "#fee2e2",
                    _ => "#f8fafc",
                };
                format!(
                    r#"  <tr style="background:{row_bg};">
    <td style="padding:8px 12px;font-weight:600;">{ticker}</td>
    <td style="padding:8px 12px;">{year}</td>
    <td style="padding:8px 12px;">{from}</td>
    <td style="padding:8px 12px;color:#ef4444;font-weight:600;">{to}</td>
    <td style="padding:8px 12px;color:#64748b;">{model}</td>
  </tr>
"#,
                    ticker = alert.ticker,
                    year = alert.fiscal_year,
                    from = alert.from_status,
                    to = alert.to_status,
                    model = alert.model,
                )
            })
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1"></head>
<body style="margin:0;padding:0;background:#f1f5f9;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;">
<table width="100%" cellpadding="0" cellspacing="0" style="background:#f1f5f9;padding:32px 0;">
  <tr><td align="center">
    <table width="600" cellpadding="0" cellspacing="0" style="background:#ffffff;border-radius:8px;overflow:hidden;box-shadow:0 1px 3px rgba(0,0,0,0.1);">
      <tr><td>
        <div style="background:#ef4444;color:#fff;padding:12px 20px;border-radius:8px 8px 0 0;font-size:18px;font-weight:700;">Company Downgrade Alerts</div>
<table style="width:100%;border-collapse:collapse;">
  <tr>
    <th style="padding:8px 12px;text-align:left;color:#94a3b8;">Ticker</th>
    <th style="padding:8px 12px;text-align:left;color:#94a3b8;">Year</th>
    <th style="padding:8px 12px;text-align:left;color:#94a3b8;">From</th>
    <th style="padding:8px 12px;text-align:left;color:#94a3b8;">To</th>
    <th style="padding:8px 12px;text-align:left;color:#94a3b8;">Model</th>
  </tr>
{rows}</table>
      </td></tr>
      <tr><td style="padding:16px 20px;border-top:1px solid #e2e8f0;">
        <p style="margin:0;color:#94a3b8;font-size:12px;">
          {count} downgrade transition(s) detected across the portfolio.
          <br>Generated at {ts} UTC
        </p>
      </td></tr>
    </table>
    <p style="color:#94a3b8;font-size:11px;margin-top:16px;">SolvencyWatch Notification Service</p>
  </td></tr>
</table>
</body>
</html>"#,
            count = digest.alerts.len(),
            ts = digest.generated_at.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}
