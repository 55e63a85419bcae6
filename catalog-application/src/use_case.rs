use async_trait::async_trait;
use catalog_domain::validation::Notification;

/// 用例结果：成功输出，或按顺序收集的错误
pub type UseCaseResult<T> = Result<T, Notification>;

/// 用例（Use Case）
///
/// 每个用例是一个持有网关的结构体，对外只暴露 `execute`：
/// - `Input`：命令或查询；
/// - `Output`：成功时的输出；
/// - 预期内的失败（校验、不存在）与意外故障（网关错误）都以
///   `Err(Notification)` 返回，不使用 panic。
#[async_trait]
pub trait UseCase: Send + Sync {
    type Input: Send + 'static;
    type Output: Send;

    async fn execute(&self, input: Self::Input) -> UseCaseResult<Self::Output>;
}
