//! 管理接口的凭证校验
//!
//! 只做共享密钥的字符串比较，密钥以明文保存在客户端，仅适用于演示环境。

/// 管理中间件依赖的校验接口
pub trait CredentialCheck: Send + Sync {
    /// 是否启用了校验
    fn is_enforced(&self) -> bool;

    /// 校验请求携带的凭证
    fn verify(&self, presented: Option<&str>) -> bool;
}

/// 与配置中的 API Key 做相等比较；未配置 Key 时放行所有请求
#[derive(Debug, Clone, Default)]
pub struct ApiKeyCheck {
    key: Option<String>,
}

impl ApiKeyCheck {
    pub fn new(key: Option<&str>) -> Self {
        Self {
            key: key.map(str::to_string),
        }
    }
}

impl CredentialCheck for ApiKeyCheck {
    fn is_enforced(&self) -> bool {
        self.key.is_some()
    }

    fn verify(&self, presented: Option<&str>) -> bool {
        match &self.key {
            Some(expected) => presented == Some(expected.as_str()),
            None => true,
        }
    }
}
