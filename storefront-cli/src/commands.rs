use anyhow::{Context, Result, anyhow, bail};
use catalog::{DashboardStats, Product, ProductStore, slug::is_valid_slug, stats};
use serde::Serialize;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Table,
    Json,
}

pub struct Commands {
    store: ProductStore,
    output: Output,
}

impl Commands {
    pub fn new(store: ProductStore, output: Output) -> Self {
        Self { store, output }
    }

    /// 初始化数据文件；`force` 时用示例数据覆盖现有内容
    pub async fn seed(&self, force: bool) -> Result<String> {
        if force {
            let count = self.store.reseed().await.context("写入示例数据失败")?;
            return Ok(format!("已重置 {} ({} 个商品)", self.store.location(), count));
        }

        self.store.ensure_store().await.context("初始化数据文件失败")?;
        Ok(format!("数据文件已就绪: {}", self.store.location()))
    }

    pub async fn list(&self, category: Option<&str>) -> Result<String> {
        let products = self.products().await?;
        let products = match category {
            Some(category) => stats::by_category(&products, category),
            None => products,
        };
        self.render_products(&products)
    }

    pub async fn show(&self, slug: &str) -> Result<String> {
        if !is_valid_slug(slug) {
            bail!("无效的 slug: {:?}，应为小写字母、数字和连字符", slug);
        }

        let product = self
            .store
            .find_by_slug(slug)
            .await
            .context("读取商品失败")?
            .ok_or_else(|| anyhow!("商品不存在: {}", slug))?;

        match self.output {
            Output::Json => to_json(&product),
            Output::Table => Ok(render_detail(&product)),
        }
    }

    pub async fn stats(&self) -> Result<String> {
        let products = self.products().await?;
        let stats = DashboardStats::from_products(&products);

        match self.output {
            Output::Json => to_json(&stats),
            Output::Table => Ok(format!(
                "Total products: {}\nLow stock items: {}\nTotal value: {:.2}\nCategories: {}",
                stats.total_products,
                stats.low_stock_items,
                stats.total_value,
                stats.categories.join(", "),
            )),
        }
    }

    pub async fn low_stock(&self, threshold: u32) -> Result<String> {
        let products = self.products().await?;
        self.render_products(&stats::low_stock(&products, threshold))
    }

    async fn products(&self) -> Result<Vec<Product>> {
        self.store
            .list_all()
            .await
            .with_context(|| format!("读取商品数据失败: {}", self.store.location()))
    }

    fn render_products(&self, products: &[Product]) -> Result<String> {
        match self.output {
            Output::Json => to_json(&products),
            Output::Table => Ok(render_table(products)),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("序列化输出失败")
}

fn render_table(products: &[Product]) -> String {
    let mut out = format!(
        "{:<38} {:<32} {:<18} {:>10} {:>9}",
        "ID", "SLUG", "CATEGORY", "PRICE", "INVENTORY"
    );
    for p in products {
        out.push('\n');
        out.push_str(&format!(
            "{:<38} {:<32} {:<18} {:>10.2} {:>9}",
            p.id, p.slug, p.category, p.price, p.inventory
        ));
    }
    out
}

fn render_detail(p: &Product) -> String {
    format!(
        "{}\n  id:           {}\n  slug:         {}\n  category:     {}\n  price:        {:.2}\n  inventory:    {}\n  last updated: {}\n  image:        {}\n\n{}",
        p.name,
        p.id,
        p.slug,
        p.category,
        p.price,
        p.inventory,
        p.last_updated.to_rfc3339(),
        p.image_url,
        p.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{FileBackend, MemoryBackend};
    use std::sync::Arc;
    use tempfile::tempdir;

    fn commands(output: Output) -> Commands {
        Commands::new(ProductStore::new(Arc::new(MemoryBackend::new())), output)
    }

    #[tokio::test]
    async fn test_list_table() {
        let out = commands(Output::Table).list(Some("Footwear")).await.unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("running-shoes"));
        assert!(lines[1].contains("129.99"));
    }

    #[tokio::test]
    async fn test_low_stock_json() {
        let out = commands(Output::Json).low_stock(catalog::LOW_STOCK_THRESHOLD).await.unwrap();
        let products: Vec<Product> = serde_json::from_str(&out).unwrap();
        let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2", "4"]);
    }

    #[tokio::test]
    async fn test_stats_json() {
        let out = commands(Output::Json).stats().await.unwrap();
        let stats: DashboardStats = serde_json::from_str(&out).unwrap();
        assert_eq!(stats.total_products, 8);
        assert_eq!(stats.low_stock_items, 2);
    }

    #[tokio::test]
    async fn test_show_missing_slug() {
        let err = commands(Output::Table).show("nope").await.unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[tokio::test]
    async fn test_show_rejects_malformed_slug() {
        let backend = Arc::new(MemoryBackend::new());
        let commands = Commands::new(ProductStore::new(backend.clone()), Output::Table);

        for slug in ["Yoga Mat", "yoga--mat", "-yoga-mat", ""] {
            let err = commands.show(slug).await.unwrap_err();
            assert!(err.to_string().contains("slug"), "{slug:?}: {err}");
        }
        // 参数不合法时不会初始化数据文件
        assert!(backend.contents().await.is_none());
    }

    #[tokio::test]
    async fn test_show_detail() {
        let out = commands(Output::Table).show("yoga-mat").await.unwrap();
        assert!(out.starts_with("Yoga Mat\n"));
        assert!(out.contains("Sports & Fitness"));
    }

    #[tokio::test]
    async fn test_seed_creates_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("data/products.json");
        let commands = Commands::new(
            ProductStore::new(Arc::new(FileBackend::new(&path))),
            Output::Table,
        );

        commands.seed(false).await.unwrap();
        assert!(path.exists());

        let out = commands.seed(true).await.unwrap();
        assert!(out.contains("8"));
    }
}
