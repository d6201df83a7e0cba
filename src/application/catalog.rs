// Chart catalog - one declarative descriptor per dashboard chart
use crate::domain::descriptor::{AxisDescriptor, ChartDescriptor, RenderKind, SeriesDescriptor};
use crate::domain::format::ValueFormat;

const AMOUNT_TITLE: &str = "금액 (조/억 원)";

pub const REVENUE: ChartDescriptor = ChartDescriptor {
    mount_id: "revenueChart",
    endpoint: "quarterly-data",
    title: "분기별 주요 손익 (2016~2025)",
    kind: RenderKind::Bar,
    series: &[
        SeriesDescriptor::bar("op_income", "영업이익", "#f48fb1", "y-revenue")
            .stacked("stack0")
            .tooltip_order(4),
        SeriesDescriptor::bar("sga", "판매관리비", "#90caf9", "y-revenue")
            .stacked("stack0")
            .tooltip_order(3),
        SeriesDescriptor::bar("cogs", "매출원가", "#a5d6a7", "y-revenue")
            .stacked("stack0")
            .tooltip_order(2),
        SeriesDescriptor::line("revenue", "매출액", "#ba68c8", "y-revenue").tooltip_order(1),
    ],
    axes: &[AxisDescriptor::left("y-revenue", ValueFormat::Currency).stacked()],
    stacked_x: true,
    legend: true,
    primary: true,
};

pub const REVENUE_RATIO: ChartDescriptor = ChartDescriptor {
    mount_id: "revenueRatioChart",
    endpoint: "revenue-ratio",
    title: "매출 구성비중 (100% Stacked)",
    kind: RenderKind::Bar,
    series: &[
        SeriesDescriptor::bar("op_income_ratio", "영업이익률", "#f48fb1", "y").stacked("ratio_stack"),
        SeriesDescriptor::bar("sga_ratio", "판매관리비율", "#90caf9", "y").stacked("ratio_stack"),
        SeriesDescriptor::bar("cogs_ratio", "매출원가율", "#a5d6a7", "y").stacked("ratio_stack"),
    ],
    axes: &[AxisDescriptor::left("y", ValueFormat::Share)
        .stacked()
        .range(0.0, 100.0)],
    stacked_x: false,
    legend: true,
    primary: false,
};

pub const ICR: ChartDescriptor = ChartDescriptor {
    mount_id: "icrChart",
    endpoint: "icr",
    title: "이자보상배율 (ICR)",
    kind: RenderKind::Line,
    series: &[SeriesDescriptor::line("icr_ratio", "이자보상배율 (ICR)", "#29b6f6", "y")
        .accent("rgba(41, 182, 246, 0.5)")
        .curved(0.4)
        .filled()],
    axes: &[AxisDescriptor::left("y", ValueFormat::Coverage)],
    stacked_x: false,
    legend: false,
    primary: false,
};

pub const NET_INCOME: ChartDescriptor = ChartDescriptor {
    mount_id: "netIncomeChart",
    endpoint: "net-income",
    title: "분기별 당기순이익",
    kind: RenderKind::Bar,
    series: &[SeriesDescriptor::bar("net_income", "당기순이익", "rgba(76, 175, 80, 0.5)", "y")],
    axes: &[AxisDescriptor::left("y", ValueFormat::Currency)],
    stacked_x: false,
    legend: false,
    primary: false,
};

pub const GROWTH: ChartDescriptor = ChartDescriptor {
    mount_id: "growthChart",
    endpoint: "growth",
    title: "성장성 지표 (YoY)",
    kind: RenderKind::Line,
    series: &[
        SeriesDescriptor::line("yoy_revenue_growth", "매출액증가율(YoY)", "#42a5f5", "y_revenue_growth")
            .accent("rgba(66, 165, 245, 0.3)")
            .curved(0.4),
        SeriesDescriptor::line("yoy_op_income_growth", "영업이익증가율(YoY)", "#ef5350", "y_op_income_growth")
            .accent("rgba(239, 83, 80, 0.3)")
            .curved(0.4)
            .filled(),
    ],
    axes: &[
        AxisDescriptor::left("y_revenue_growth", ValueFormat::Percent)
            .signed()
            .titled("매출액증가율 (%)"),
        AxisDescriptor::right("y_op_income_growth", ValueFormat::Percent)
            .signed()
            .titled("영업이익증가율 (%)"),
    ],
    stacked_x: false,
    legend: true,
    primary: false,
};

pub const STABILITY: ChartDescriptor = ChartDescriptor {
    mount_id: "stabilityChart",
    endpoint: "stability",
    title: "안정성 지표 (2023.3Q~)",
    kind: RenderKind::Line,
    series: &[
        SeriesDescriptor::line("debt_ratio", "부채비율", "#ffa726", "y_debt_ratio")
            .accent("rgba(255, 167, 38, 0.3)")
            .curved(0.4),
        SeriesDescriptor::line("current_ratio", "유동비율", "#66bb6a", "y_current_ratio")
            .accent("rgba(102, 187, 106, 0.3)")
            .curved(0.4),
    ],
    axes: &[
        AxisDescriptor::left("y_debt_ratio", ValueFormat::Percent).titled("부채비율 (%)"),
        AxisDescriptor::right("y_current_ratio", ValueFormat::Percent).titled("유동비율 (%)"),
    ],
    stacked_x: false,
    legend: true,
    primary: false,
};

pub const DIVIDEND_SUMMARY: ChartDescriptor = ChartDescriptor {
    mount_id: "dividendSummaryChart",
    endpoint: "dividend-summary",
    title: "분기별 EPS, DPS 및 배당성향 (2023.3Q~)",
    kind: RenderKind::Bar,
    series: &[
        SeriesDescriptor::bar("eps", "주당순이익(EPS)", "rgba(144, 202, 249, 0.7)", "y_amount")
            .accent("rgba(144, 202, 249, 1)"),
        SeriesDescriptor::bar("dps", "주당배당금(DPS)", "rgba(30, 136, 229, 0.7)", "y_amount")
            .accent("rgba(30, 136, 229, 1)"),
        SeriesDescriptor::line("payout_ratio", "배당성향(%)", "#ec407a", "y_percent")
            .accent("rgba(236, 64, 122, 0.3)")
            .curved(0.4),
    ],
    axes: &[
        AxisDescriptor::left("y_amount", ValueFormat::Won).titled("금액 (원)"),
        AxisDescriptor::right("y_percent", ValueFormat::Percent).titled("배당성향 (%)"),
    ],
    stacked_x: false,
    legend: true,
    primary: false,
};

pub const CASH_FLOW: ChartDescriptor = ChartDescriptor {
    mount_id: "cashFlowChart",
    endpoint: "cash-flow-ttm",
    title: "분기별 현금흐름 (TTM)",
    kind: RenderKind::Bar,
    series: &[
        SeriesDescriptor::bar("fcf", "FCF (잉여현금흐름)", "rgba(66, 165, 245, 0.7)", "y"),
        SeriesDescriptor::line("ocf", "영업현금흐름(OCF)", "#f48fb1", "y").curved(0.3),
        SeriesDescriptor::line("icf", "투자현금흐름(ICF)", "#ffb74d", "y").curved(0.3),
        SeriesDescriptor::line("ffcf", "재무현금흐름(FFCF)", "#a5d6a7", "y").curved(0.3),
    ],
    axes: &[AxisDescriptor::left("y", ValueFormat::Currency)
        .signed()
        .titled(AMOUNT_TITLE)],
    stacked_x: false,
    legend: true,
    primary: false,
};

pub const CAPEX_CASH_FLOW: ChartDescriptor = ChartDescriptor {
    mount_id: "capexCashFlowTTMChart",
    endpoint: "cash-flow-ttm",
    title: "CAPEX vs 현금흐름 (TTM)",
    kind: RenderKind::Bar,
    series: &[
        SeriesDescriptor::line("ocf", "영업현금흐름(OCF)", "#f48fb1", "y_amount").curved(0.3),
        SeriesDescriptor::bar("capex", "자본적 지출(CAPEX)", "rgba(255, 193, 7, 0.9)", "y_amount")
            .stacked("cashFlowStack"),
        SeriesDescriptor::bar("fcf", "FCF (잉여현금흐름)", "rgba(66, 165, 245, 0.9)", "y_amount")
            .stacked("cashFlowStack"),
    ],
    axes: &[AxisDescriptor::left("y_amount", ValueFormat::Currency)
        .stacked()
        .titled(AMOUNT_TITLE)],
    stacked_x: false,
    legend: true,
    primary: false,
};

pub const BALANCE_SHEET: ChartDescriptor = ChartDescriptor {
    mount_id: "balanceSheetChart",
    endpoint: "balance-sheet",
    title: "자산의 구성 (2016~)",
    kind: RenderKind::Bar,
    series: &[
        SeriesDescriptor::line("total_assets", "자산총계", "#f48fb1", "y_amount").curved(0.3),
        SeriesDescriptor::bar("current_assets", "유동자산", "rgba(255, 193, 7, 0.9)", "y_amount")
            .stacked("assetStack"),
        SeriesDescriptor::bar("non_current_assets", "비유동자산", "rgba(66, 165, 245, 0.9)", "y_amount")
            .stacked("assetStack"),
    ],
    axes: &[AxisDescriptor::left("y_amount", ValueFormat::Currency)
        .stacked()
        .titled(AMOUNT_TITLE)],
    stacked_x: false,
    legend: true,
    primary: false,
};

pub const EQUITY: ChartDescriptor = ChartDescriptor {
    mount_id: "equityChart",
    endpoint: "equity-composition",
    title: "자본의 구성 (2016~)",
    kind: RenderKind::Bar,
    series: &[
        SeriesDescriptor::line("total_equity", "지배주주 자본총계", "#81c784", "y_amount").curved(0.3),
        SeriesDescriptor::bar("retained_earnings", "이익잉여금", "rgba(239, 83, 80, 0.8)", "y_amount")
            .stacked("equityStack"),
        SeriesDescriptor::bar("other_capital", "기타자본항목", "rgba(66, 165, 245, 0.8)", "y_amount")
            .stacked("equityStack"),
        SeriesDescriptor::bar("capital_surplus", "자본잉여금", "rgba(255, 238, 88, 0.9)", "y_amount")
            .stacked("equityStack"),
        SeriesDescriptor::bar("capital_stock", "자본금", "rgba(170, 170, 170, 0.8)", "y_amount")
            .stacked("equityStack"),
    ],
    // other_capital can be negative
    axes: &[AxisDescriptor::left("y_amount", ValueFormat::Currency)
        .signed()
        .stacked()
        .titled(AMOUNT_TITLE)],
    stacked_x: false,
    legend: true,
    primary: false,
};

pub const LIABILITIES: ChartDescriptor = ChartDescriptor {
    mount_id: "liabilitiesChart",
    endpoint: "liabilities",
    title: "부채 현황 (2016~)",
    kind: RenderKind::Bar,
    series: &[
        SeriesDescriptor::line("total_liabilities", "부채총계", "#ffb74d", "y_amount").curved(0.3),
        SeriesDescriptor::bar("current_liabilities", "유동부채", "rgba(239, 83, 80, 0.8)", "y_amount")
            .stacked("liabilityStack"),
        SeriesDescriptor::bar("non_current_liabilities", "비유동부채", "rgba(156, 204, 101, 0.8)", "y_amount")
            .stacked("liabilityStack"),
    ],
    axes: &[AxisDescriptor::left("y_amount", ValueFormat::Currency)
        .stacked()
        .titled(AMOUNT_TITLE)],
    stacked_x: false,
    legend: true,
    primary: false,
};

/// Every chart on the dashboard, in launch order
pub const CHARTS: &[ChartDescriptor] = &[
    REVENUE,
    REVENUE_RATIO,
    ICR,
    NET_INCOME,
    GROWTH,
    STABILITY,
    DIVIDEND_SUMMARY,
    CASH_FLOW,
    CAPEX_CASH_FLOW,
    BALANCE_SHEET,
    EQUITY,
    LIABILITIES,
];
