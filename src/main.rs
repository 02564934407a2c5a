// ==========================================
// 披萨面团计算器 - 命令行入口
// ==========================================
// 职责: 表现层（收集原始文本 → DoughApi → 格式化输出）
// ==========================================

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};

use pizza_dough_calc::api::{
    dto::format_grams, ApiError, DoughApi, DoughForm, DoughResponse, ValidationMode,
};
use pizza_dough_calc::config::ConfigManager;
use pizza_dough_calc::{logging, APP_NAME, VERSION};

#[derive(Parser)]
#[command(name = "pizza-dough-calc")]
#[command(author, version, about = "披萨面团计算器: 由 TK/TO 发酵方案推导酵母、配料与揉面时间", long_about = None)]
struct Cli {
    /// 配置文件路径（默认: $PIZZA_DOUGH_CONFIG 或用户配置目录）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 以 JSON 输出
    #[arg(long, global = true)]
    json: bool,

    /// 严格校验（无法解析或低于下限的输入直接报错）
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 计算完整配方（默认命令）
    Calc(FormArgs),
    /// 只估算酵母百分比
    Yeast(FormArgs),
    /// 列出面粉预设
    Flours,
}

/// 表单参数（均为原始文本,支持小数逗号）
#[derive(Args, Default)]
struct FormArgs {
    /// 面粉预设名称
    #[arg(long)]
    flour: Option<String>,
    /// 面团球数量（每个按配置的单球重量计）
    #[arg(long)]
    balls: Option<String>,
    /// 含水率 %（默认取面粉预设）
    #[arg(long)]
    hydration: Option<String>,
    /// 盐 %
    #[arg(long)]
    salt: Option<String>,
    /// 橄榄油 %
    #[arg(long)]
    oil: Option<String>,
    /// 酵母类型: instant / dry / fresh
    #[arg(long)]
    yeast: Option<String>,
    /// TK 时长（小时）
    #[arg(long = "tk-hours")]
    tk_hours: Option<String>,
    /// TK 温度（°C）
    #[arg(long = "tk-temp", allow_hyphen_values = true)]
    tk_temp: Option<String>,
    /// TO 时长（小时）
    #[arg(long = "to-hours")]
    to_hours: Option<String>,
    /// TO 温度（°C）
    #[arg(long = "to-temp", allow_hyphen_values = true)]
    to_temp: Option<String>,
}

impl FormArgs {
    /// 以默认表单为底,覆写命令行给出的字段
    fn into_form(self, api: &DoughApi) -> Result<DoughForm, ApiError> {
        let mut form = api.default_form();

        if let Some(flour) = self.flour {
            api.select_flour(&mut form, &flour)?;
        }
        if let Some(v) = self.hydration {
            form.hydration = Some(v);
        }
        if let Some(v) = self.balls {
            form.balls = v;
        }
        if let Some(v) = self.salt {
            form.salt = v;
        }
        if let Some(v) = self.oil {
            form.oil = v;
        }
        if let Some(v) = self.yeast {
            form.yeast = v;
        }
        if let Some(v) = self.tk_hours {
            form.tk_hours = v;
        }
        if let Some(v) = self.tk_temp {
            form.tk_temp = v;
        }
        if let Some(v) = self.to_hours {
            form.to_hours = v;
        }
        if let Some(v) = self.to_temp {
            form.to_temp = v;
        }

        Ok(form)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.json {
        logging::init_json("warn");
    } else {
        logging::init("warn");
    }
    tracing::debug!(version = VERSION, "{} 启动", APP_NAME);

    let config = ConfigManager::load(cli.config.as_deref()).map_err(|e| anyhow!("{}", e))?;
    let mut api = DoughApi::from_config(&config).map_err(|e| anyhow!("{}", e))?;
    if cli.strict {
        api = api.with_validation_mode(ValidationMode::Strict);
    }

    let command = cli.command.unwrap_or(Commands::Calc(FormArgs::default()));
    match run(&api, command, cli.json) {
        Ok(()) => Ok(()),
        Err(err) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&err.to_response())?);
            }
            Err(err.into())
        }
    }
}

fn run(api: &DoughApi, command: Commands, json: bool) -> Result<(), ApiError> {
    match command {
        Commands::Flours => {
            let flours = api.list_flours();
            if json {
                print_json(&flours)?;
            } else {
                for flour in flours {
                    println!(
                        "{:<40} 蛋白质 {:>5.1}%  建议含水率 {:>4}%  筋力 {}",
                        flour.name,
                        flour.protein,
                        flour.hydration,
                        strength_bar(flour.strength_pct)
                    );
                }
            }
        }
        Commands::Yeast(args) => {
            let form = args.into_form(api)?;
            let yeast_pct = api.estimate_yeast(&form)?;
            if json {
                print_json(&serde_json::json!({ "yeast": form.yeast, "yeast_pct": yeast_pct }))?;
            } else {
                println!("酵母: {}%（由 TK/TO 自动估算）", yeast_pct);
            }
        }
        Commands::Calc(args) => {
            let form = args.into_form(api)?;
            let response = api.calculate(&form)?;
            if json {
                print_json(&response)?;
            } else {
                print_report(&response);
            }
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), ApiError> {
    let text = serde_json::to_string_pretty(value).map_err(anyhow::Error::from)?;
    println!("{}", text);
    Ok(())
}

fn strength_bar(strength_pct: f64) -> String {
    let filled = (strength_pct / 10.0).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled.min(10)))
}

fn print_report(resp: &DoughResponse) {
    let k = &resp.kneading;

    println!("{}", APP_NAME);
    println!("==================================================");
    println!(
        "面粉: {}（蛋白质 {}% {}，建议含水率 {}%）",
        resp.flour.name,
        resp.flour.protein,
        strength_bar(resp.flour.strength_pct),
        resp.flour.hydration
    );
    println!(
        "面团: {} 个 × {} g = {} g，含水率 {}%",
        resp.ball_count,
        resp.total_dough_mass_grams / resp.ball_count,
        format_grams(resp.total_dough_mass_grams),
        resp.hydration_pct
    );
    println!("酵母: {} {}%（由 TK/TO 自动估算）", resp.yeast_form.label(), resp.yeast_pct);
    println!();
    println!("揉面时间（建议）");
    println!("  手工揉面:         {} 分钟", k.knead_minutes);
    println!("  厨师机:           {} 分钟", k.planetary_minutes);
    println!("  手持打蛋器(面钩): {} 分钟", k.hand_mixer_minutes);
    println!(
        "  折叠: {} 次，每 {} 分钟（约 {} 分钟）",
        k.fold_count, k.fold_interval_minutes, k.total_fold_minutes
    );
    println!("  {}", resp.kneading_advice);
    println!();
    println!("配料（克）");
    for line in &resp.ingredients {
        println!("  {:<6} {:>8}", line.label, line.display_grams());
    }
    println!();
    println!("{}", resp.tip);
}
