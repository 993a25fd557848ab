use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
    Healthy,
}

/// Uniform JSON body returned by every endpoint.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize = ()> {
    status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
}

impl<T: Serialize> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            data: Some(data),
            count: None,
        }
    }

    pub fn data_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: Some(message.into()),
            data: Some(data),
            count: None,
        }
    }
}

impl<T: Serialize> Envelope<Vec<T>> {
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            status: ResponseStatus::Success,
            message: None,
            data: Some(items),
            count: Some(count),
        }
    }
}

impl Envelope {
    pub fn message(message: impl Into<String>) -> Self {
        Self::bare(ResponseStatus::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::bare(ResponseStatus::Error, message)
    }

    pub fn healthy(message: impl Into<String>) -> Self {
        Self::bare(ResponseStatus::Healthy, message)
    }

    fn bare(status: ResponseStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            data: None,
            count: None,
        }
    }
}
